//! Map projections from (latitude, longitude) to plane coordinates.
//!
//! Every formula takes radians. `φ` is the latitude, `λ` the longitude, `S` the linear scale and
//! `λ0`/`φ0` the reference meridian/parallel of the current run (the mean over the geocoded nodes).
//!
//! | Projection          | x                                      | y                          |
//! |---------------------|----------------------------------------|----------------------------|
//! | Mercator            | (λ−λ0)·S                               | S·ln(tan(π/4+φ/2))         |
//! | Transverse Mercator | λ·S                                    | (S/2)·ln((1+sinφ)/(1−sinφ))|
//! | Miller cylindrical  | λ·S                                    | (5S/4)·ln(tan(π/4+2φ/5))   |
//! | Gall–Peters         | λ·S                                    | 2S·sinφ                    |
//! | Sinusoidal          | (λ−λ0)·cosφ·S                          | S·φ                        |
//! | Lambert cylindrical | (λ−λ0)·cosφ0·S                         | S·sinφ/cosφ0               |
//! | Equirectangular     | S·λ                                    | S·φ                        |
//! | Winkel tripel       | S·(2λ/π + 2cosφ·sin(λ/2)·α/sinα)       | S·(φ + sinφ·α/sinα)        |
//!
//! with `α = acos(cos(λ/2)·2/π)` for Winkel tripel.

use std::f64::consts::{FRAC_PI_4, PI};
use std::fmt;
use std::str::FromStr;

use geolayout_graph::Point;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProjectionKind {
    #[default]
    Mercator,
    TransverseMercator,
    MillerCylindrical,
    GallPeters,
    Sinusoidal,
    /// Lambert cylindrical equal-area.
    LambertCylindrical,
    Equirectangular,
    WinkelTripel,
}

/// Reference meridian `λ0` and parallel `φ0`, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReferenceLines {
    pub lambda0: f64,
    pub phi0: f64,
}

impl ReferenceLines {
    /// Mean longitude/latitude of `coords` (`(φ, λ)` pairs, radians); `None` when empty.
    pub fn mean_of(coords: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        let mut count = 0usize;
        let mut sum_phi = 0.0;
        let mut sum_lambda = 0.0;
        for (phi, lambda) in coords {
            count += 1;
            sum_phi += phi;
            sum_lambda += lambda;
        }
        if count == 0 {
            return None;
        }
        Some(Self {
            lambda0: sum_lambda / count as f64,
            phi0: sum_phi / count as f64,
        })
    }
}

/// A projection formula: `(φ, λ, S, reference) -> (x, y)`.
pub type ProjectionFn = fn(f64, f64, f64, &ReferenceLines) -> Point;

impl ProjectionKind {
    pub const ALL: [ProjectionKind; 8] = [
        ProjectionKind::Mercator,
        ProjectionKind::TransverseMercator,
        ProjectionKind::MillerCylindrical,
        ProjectionKind::GallPeters,
        ProjectionKind::Sinusoidal,
        ProjectionKind::LambertCylindrical,
        ProjectionKind::Equirectangular,
        ProjectionKind::WinkelTripel,
    ];

    /// Display name, as offered by a host property sheet.
    pub fn name(self) -> &'static str {
        match self {
            Self::Mercator => "Mercator",
            Self::TransverseMercator => "Transverse Mercator",
            Self::MillerCylindrical => "Miller cylindrical",
            Self::GallPeters => "Gall–Peters",
            Self::Sinusoidal => "Sinusoidal",
            Self::LambertCylindrical => "Lambert cylindrical",
            Self::Equirectangular => "Equirectangular",
            Self::WinkelTripel => "Winkel tripel",
        }
    }

    pub fn names() -> [&'static str; 8] {
        Self::ALL.map(Self::name)
    }

    /// Looks a projection up by display name, ignoring ASCII case.
    ///
    /// `Gall-Peters` with an ASCII hyphen is accepted as well.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|kind| names_match(kind.name(), name))
    }

    pub fn needs_reference_meridian(self) -> bool {
        matches!(self, Self::Mercator | Self::Sinusoidal | Self::LambertCylindrical)
    }

    pub fn needs_reference_parallel(self) -> bool {
        matches!(self, Self::LambertCylindrical)
    }

    pub fn needs_reference_lines(self) -> bool {
        self.needs_reference_meridian() || self.needs_reference_parallel()
    }

    pub fn formula(self) -> ProjectionFn {
        match self {
            Self::Mercator => mercator,
            Self::TransverseMercator => transverse_mercator,
            Self::MillerCylindrical => miller_cylindrical,
            Self::GallPeters => gall_peters,
            Self::Sinusoidal => sinusoidal,
            Self::LambertCylindrical => lambert_cylindrical,
            Self::Equirectangular => equirectangular,
            Self::WinkelTripel => winkel_tripel,
        }
    }

    /// Projects `(φ, λ)` (radians) with this projection.
    pub fn project(self, phi: f64, lambda: f64, scale: f64, reference: &ReferenceLines) -> Point {
        (self.formula())(phi, lambda, scale, reference)
    }
}

impl fmt::Display for ProjectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProjectionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::UnknownProjection {
            name: s.to_string(),
        })
    }
}

fn names_match(a: &str, b: &str) -> bool {
    let normalize = |c: char| if c == '–' { '-' } else { c.to_ascii_lowercase() };
    a.chars().map(normalize).eq(b.chars().map(normalize))
}

fn mercator(phi: f64, lambda: f64, s: f64, r: &ReferenceLines) -> Point {
    Point::new((lambda - r.lambda0) * s, (FRAC_PI_4 + phi / 2.0).tan().ln() * s)
}

fn transverse_mercator(phi: f64, lambda: f64, s: f64, _r: &ReferenceLines) -> Point {
    let sin_phi = phi.sin();
    Point::new(lambda * s, s / 2.0 * ((1.0 + sin_phi) / (1.0 - sin_phi)).ln())
}

fn miller_cylindrical(phi: f64, lambda: f64, s: f64, _r: &ReferenceLines) -> Point {
    Point::new(lambda * s, (FRAC_PI_4 + 2.0 * phi / 5.0).tan().ln() * s * 5.0 / 4.0)
}

fn gall_peters(phi: f64, lambda: f64, s: f64, _r: &ReferenceLines) -> Point {
    Point::new(lambda * s, 2.0 * s * phi.sin())
}

fn sinusoidal(phi: f64, lambda: f64, s: f64, r: &ReferenceLines) -> Point {
    Point::new((lambda - r.lambda0) * phi.cos() * s, s * phi)
}

fn lambert_cylindrical(phi: f64, lambda: f64, s: f64, r: &ReferenceLines) -> Point {
    let cos_phi0 = r.phi0.cos();
    Point::new((lambda - r.lambda0) * cos_phi0 * s, s * phi.sin() / cos_phi0)
}

fn equirectangular(phi: f64, lambda: f64, s: f64, _r: &ReferenceLines) -> Point {
    Point::new(s * lambda, s * phi)
}

fn winkel_tripel(phi: f64, lambda: f64, s: f64, _r: &ReferenceLines) -> Point {
    let alpha = ((lambda / 2.0).cos() * 2.0 / PI).acos();
    let k = alpha_over_sin(alpha);
    Point::new(
        s * (lambda * 2.0 / PI + 2.0 * phi.cos() * (lambda / 2.0).sin() * k),
        s * (phi + phi.sin() * k),
    )
}

/// `α / sin α`, taking its limit 1 where `sin α` is zero.
///
/// With `α = acos(cos(λ/2)·2/π)` the acos argument stays within `±2/π`, so in practice
/// `α ∈ [0.8807, 2.2609]` and the division is always defined.
fn alpha_over_sin(alpha: f64) -> f64 {
    let sin = alpha.sin();
    if sin.abs() < f64::EPSILON {
        1.0
    } else {
        alpha / sin
    }
}

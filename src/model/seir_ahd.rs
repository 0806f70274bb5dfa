use serde::{Deserialize, Serialize};

use crate::error::SeirAhdError;

/// Number of compartments in the state vector.
pub const N_COMPARTMENTS: usize = 8;

/// Number of entries in the raw parameter sequence
/// `[n0, beta, alpha, f_e, gamma, rho, delta, kappa_h]`. Equal to
/// [`N_COMPARTMENTS`] by coincidence, not by construction.
pub const N_PARAMS: usize = 8;

// State vector layout: [S, E, I, A, H, R, D, C]
pub const S: usize = 0;
pub const E: usize = 1;
pub const I: usize = 2;
pub const A: usize = 3;
pub const H: usize = 4;
pub const R: usize = 5;
pub const D: usize = 6;
pub const C: usize = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeirAhdParams {
    /// Initial total population (whole number).
    pub n0: f64,

    // Transmission
    pub beta: f64, // effective contact rate (per day)

    // Rates (per day)
    pub alpha: f64, // 1/incubation mean, E -> infectious
    pub gamma: f64, // recovery rate
    pub rho: f64,   // hospitalization rate, I -> H
    pub delta: f64, // death rate

    // Dimensionless fractions in [0, 1]
    pub f_e: f64,     // fraction of E progressing to symptomatic I
    pub kappa_h: f64, // relative death rate while hospitalized
}

impl SeirAhdParams {
    /// Build from a raw 8-element slice in canonical order
    /// `[n0, beta, alpha, f_e, gamma, rho, delta, kappa_h]`.
    pub fn from_slice(param: &[f64]) -> Result<Self, SeirAhdError> {
        if param.len() != N_PARAMS {
            return Err(SeirAhdError::InvalidParameterCount(param.len()));
        }
        let p = Self {
            n0: param[0],
            beta: param[1],
            alpha: param[2],
            f_e: param[3],
            gamma: param[4],
            rho: param[5],
            delta: param[6],
            kappa_h: param[7],
        };
        p.check()?;
        Ok(p)
    }

    /// Canonical slice order, inverse of [`from_slice`](Self::from_slice).
    pub fn to_array(&self) -> [f64; N_PARAMS] {
        [
            self.n0,
            self.beta,
            self.alpha,
            self.f_e,
            self.gamma,
            self.rho,
            self.delta,
            self.kappa_h,
        ]
    }

    pub fn check(&self) -> Result<(), SeirAhdError> {
        if self.n0.fract() != 0.0 {
            return Err(SeirAhdError::InvalidPopulationSize(self.n0));
        }
        let named = [
            ("n0", self.n0),
            ("beta", self.beta),
            ("alpha", self.alpha),
            ("f_e", self.f_e),
            ("gamma", self.gamma),
            ("rho", self.rho),
            ("delta", self.delta),
            ("kappa_h", self.kappa_h),
        ];
        for (name, value) in named {
            if value < 0.0 {
                return Err(SeirAhdError::NegativeParameter { name, value });
            }
        }
        for (name, value) in [("f_e", self.f_e), ("kappa_h", self.kappa_h)] {
            if value > 1.0 {
                return Err(SeirAhdError::FractionOutOfRange { name, value });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct SeirAhdState {
    pub y: [f64; N_COMPARTMENTS],
}

impl SeirAhdState {
    pub fn new_zero() -> Self {
        Self { y: [0.0; N_COMPARTMENTS] }
    }

    /// Seed initial exposed/symptomatic/asymptomatic counts; the
    /// remainder of n0 starts susceptible. Callers keep the combined
    /// seed within n0.
    pub fn init_from_seeding(params: &SeirAhdParams, e0: f64, i0: f64, a0: f64) -> Self {
        let mut s = Self::new_zero();
        s.y[S] = params.n0 - (e0 + i0 + a0);
        s.y[E] = e0;
        s.y[I] = i0;
        s.y[A] = a0;
        s
    }

    /// Sum of S..D. Conserved by the dynamics; C is excluded because it
    /// is flow accounting, not a population split.
    pub fn total(&self) -> f64 {
        self.y[..C].iter().sum()
    }
}

pub struct SeirAhdModel {
    pub params: SeirAhdParams,
}

impl SeirAhdModel {
    pub fn new(params: SeirAhdParams) -> Result<Self, SeirAhdError> {
        params.check()?;
        Ok(Self { params })
    }

    /// Right-hand side of the SEIR-AHD system.
    ///
    /// `t` is accepted for solver-callback compatibility but unused:
    /// the system is autonomous. The force of infection divides by the
    /// living population `N = n0 - D`; when `D` reaches `n0` the result
    /// follows IEEE semantics (inf/NaN) rather than being guarded, so a
    /// modeling error upstream (integrator overshoot past `n0`) stays
    /// visible to the caller.
    pub fn deriv(&self, _t: f64, y: &[f64; N_COMPARTMENTS], dy: &mut [f64; N_COMPARTMENTS]) {
        let p = &self.params;
        let (s, e, i, a, h) = (y[S], y[E], y[I], y[A], y[H]);
        let d = y[D];

        let n = p.n0 - d;
        let lambda = p.beta * s * (i + a + h) / n;

        dy[S] = -lambda;
        dy[E] = lambda - p.alpha * e;
        dy[I] = p.f_e * p.alpha * e - (p.gamma + p.rho + p.delta) * i;
        dy[A] = (1.0 - p.f_e) * p.alpha * e - (p.gamma + p.delta) * a;
        dy[H] = p.rho * i - (p.gamma + p.kappa_h * p.delta) * h;
        dy[R] = p.gamma * (i + a + h);
        dy[D] = p.delta * (i + a + p.kappa_h * h);
        dy[C] = p.alpha * e;
    }
}

/// ODE-callback entry point over raw sequences: validates `param` on
/// every call, then evaluates the derivative. Pure and reentrant;
/// concurrent callers need no coordination.
pub fn evaluate(
    t: f64,
    y: &[f64; N_COMPARTMENTS],
    param: &[f64],
) -> Result<[f64; N_COMPARTMENTS], SeirAhdError> {
    let params = SeirAhdParams::from_slice(param)?;
    let model = SeirAhdModel { params };
    let mut dy = [0.0; N_COMPARTMENTS];
    model.deriv(t, y, &mut dy);
    Ok(dy)
}

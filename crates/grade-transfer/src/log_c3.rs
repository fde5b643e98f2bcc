//! ARRI LogC3, the ALEXA encoding before LogC4.
//!
//! LogC3 is a family: each exposure index has its own parameter set. The
//! pipeline only uses EI 800, exposed as [`EI_800`]; the free functions
//! [`encode`] and [`decode`] evaluate that set.
//!
//! Reference: ARRI, "ALEXA Log C Curve - Usage in VFX".

/// One exposure index worth of LogC3 parameters.
///
/// Above `cut` the curve is `c * log10(a * x + b) + d`; below it the
/// straight segment `e * x + f`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogC3Params {
    /// Linear break between the straight and log segments.
    pub cut: f32,
    /// Log segment input gain.
    pub a: f32,
    /// Log segment input offset.
    pub b: f32,
    /// Log segment output gain.
    pub c: f32,
    /// Log segment output offset.
    pub d: f32,
    /// Straight segment slope.
    pub e: f32,
    /// Straight segment offset.
    pub f: f32,
}

/// Parameters at EI 800.
pub const EI_800: LogC3Params = LogC3Params {
    cut: 0.010591,
    a: 5.555556,
    b: 0.052272,
    c: 0.247190,
    d: 0.385537,
    e: 5.367655,
    f: 0.092809,
};

impl LogC3Params {
    /// Encoded value at the break.
    #[inline]
    pub fn code_cut(&self) -> f32 {
        self.e * self.cut + self.f
    }

    /// Linear to LogC3.
    #[inline]
    pub fn encode(&self, x: f32) -> f32 {
        if x > self.cut {
            self.c * (self.a * x + self.b).log10() + self.d
        } else {
            self.e * x + self.f
        }
    }

    /// LogC3 to linear.
    #[inline]
    pub fn decode(&self, y: f32) -> f32 {
        if y > self.code_cut() {
            (10f32.powf((y - self.d) / self.c) - self.b) / self.a
        } else {
            (y - self.f) / self.e
        }
    }
}

/// Linear to LogC3 (EI 800).
///
/// ```rust
/// use grade_transfer::log_c3;
///
/// assert!((log_c3::encode(0.18) - 0.391).abs() < 0.01);
/// ```
#[inline]
pub fn encode(linear: f32) -> f32 {
    EI_800.encode(linear)
}

/// LogC3 (EI 800) to linear.
#[inline]
pub fn decode(log: f32) -> f32 {
    EI_800.decode(log)
}

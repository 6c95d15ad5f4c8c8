/// Integer-degree sine/cosine lookup table
use once_cell::sync::Lazy;

const TABLE_SIZE: usize = 360;

static SHARED: Lazy<TrigTable> = Lazy::new(TrigTable::new);

/// Precomputed sine and cosine for every whole degree in [0, 360)
#[derive(Debug, Clone)]
pub struct TrigTable {
    sin: [f64; TABLE_SIZE],
    cos: [f64; TABLE_SIZE],
}

impl TrigTable {
    pub fn new() -> Self {
        let mut sin = [0.0; TABLE_SIZE];
        let mut cos = [0.0; TABLE_SIZE];
        for (degree, (s, c)) in sin.iter_mut().zip(cos.iter_mut()).enumerate() {
            let (sd, cd) = (degree as f64).to_radians().sin_cos();
            *s = sd;
            *c = cd;
        }
        Self { sin, cos }
    }

    /// Process-wide table, built on first use
    pub fn shared() -> &'static TrigTable {
        &SHARED
    }

    /// Reduce any integer degree to a table index in [0, 359]
    fn index(degree: i64) -> usize {
        degree.rem_euclid(TABLE_SIZE as i64) as usize
    }

    pub fn sin(&self, degree: i64) -> f64 {
        self.sin[Self::index(degree)]
    }

    pub fn cos(&self, degree: i64) -> f64 {
        self.cos[Self::index(degree)]
    }

    /// Sine and cosine of a fractional angle, truncated toward zero to whole degrees
    pub fn sin_cos_quantized(&self, degrees: f64) -> (f64, f64) {
        let degree = degrees as i64;
        (self.sin(degree), self.cos(degree))
    }
}

impl Default for TrigTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_pythagorean_identity() {
        let table = TrigTable::new();
        for degree in -720..720 {
            let s = table.sin(degree);
            let c = table.cos(degree);
            assert_abs_diff_eq!(s * s + c * c, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_out_of_range_degrees_wrap() {
        let table = TrigTable::shared();
        assert_eq!(table.sin(-90), table.sin(270));
        assert_eq!(table.cos(360), table.cos(0));
        assert_eq!(table.sin(725), table.sin(5));
    }

    #[test]
    fn test_quantization_truncates() {
        let table = TrigTable::new();
        assert_eq!(table.sin_cos_quantized(30.9), (table.sin(30), table.cos(30)));
        assert_eq!(table.sin_cos_quantized(-30.9), (table.sin(-30), table.cos(-30)));
        assert_abs_diff_eq!(table.sin(30), 0.5, epsilon = 1e-12);
    }
}

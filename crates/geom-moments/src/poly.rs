//! Truncated bivariate polynomials over the unit parameter triangle.
//!
//! A triangle is parametrized as `r(u, v) = v0 + u*e1 + v*e2` over the
//! domain `{u, v >= 0, u + v <= 1}`, so each spatial coordinate of `r` is a
//! linear polynomial in `(u, v)`. Products of such coordinates are dense
//! bivariate polynomials, and every monomial `u^p v^q` has the closed-form
//! integral `p! q! / (p + q + 2)!` over the domain.
//!
//! Polynomials carry a truncation degree: terms whose total `(u, v)` degree
//! exceeds it are dropped during multiplication. Choosing the truncation
//! degree at or above the integrand's total degree makes the integral exact;
//! a lower truncation deliberately discards the tail.

/// Dense bivariate polynomial in `(u, v)`, truncated at total degree `deg`.
///
/// Coefficients are stored row-major: `coeffs[p * (deg + 1) + q]` is the
/// coefficient of `u^p v^q`. Entries with `p + q > deg` stay zero.
#[derive(Debug, Clone)]
pub(crate) struct TriPoly {
    deg: usize,
    coeffs: Vec<f64>,
}

impl TriPoly {
    /// The constant polynomial `1`.
    pub(crate) fn one(deg: usize) -> Self {
        let mut coeffs = vec![0.0; (deg + 1) * (deg + 1)];
        coeffs[0] = 1.0;
        Self { deg, coeffs }
    }

    /// The linear polynomial `c0 + cu*u + cv*v`, truncated at `deg`.
    ///
    /// At `deg == 0` only the constant term survives.
    pub(crate) fn linear(deg: usize, c0: f64, cu: f64, cv: f64) -> Self {
        let width = deg + 1;
        let mut coeffs = vec![0.0; width * width];
        coeffs[0] = c0;
        if deg >= 1 {
            coeffs[width] = cu;
            coeffs[1] = cv;
        }
        Self { deg, coeffs }
    }

    /// `(c0 + cu*u + cv*v)^n`, truncated at `deg`.
    ///
    /// Multiplication by a linear factor never lowers a term's degree, so
    /// truncating at every step is equivalent to truncating the final
    /// expansion.
    pub(crate) fn linear_pow(deg: usize, c0: f64, cu: f64, cv: f64, n: u32) -> Self {
        let factor = Self::linear(deg, c0, cu, cv);
        let mut acc = Self::one(deg);
        for _ in 0..n {
            acc = acc.mul(&factor);
        }
        acc
    }

    /// Multiply two polynomials, truncating at the common degree bound.
    pub(crate) fn mul(&self, rhs: &Self) -> Self {
        debug_assert_eq!(self.deg, rhs.deg);
        let deg = self.deg;
        let width = deg + 1;
        let mut coeffs = vec![0.0; width * width];

        for p1 in 0..=deg {
            for q1 in 0..=(deg - p1) {
                let c1 = self.coeffs[p1 * width + q1];
                if c1 == 0.0 {
                    continue;
                }
                for p2 in 0..=(deg - p1 - q1) {
                    for q2 in 0..=(deg - p1 - q1 - p2) {
                        let c2 = rhs.coeffs[p2 * width + q2];
                        if c2 != 0.0 {
                            coeffs[(p1 + p2) * width + (q1 + q2)] += c1 * c2;
                        }
                    }
                }
            }
        }

        Self { deg, coeffs }
    }

    /// Integrate over the unit parameter triangle.
    ///
    /// `factorial` must cover indices up to `deg + 2`.
    pub(crate) fn integrate(&self, factorial: &[f64]) -> f64 {
        let width = self.deg + 1;
        let mut sum = 0.0;
        for p in 0..=self.deg {
            for q in 0..=(self.deg - p) {
                let c = self.coeffs[p * width + q];
                if c != 0.0 {
                    sum += c * factorial[p] * factorial[q] / factorial[p + q + 2];
                }
            }
        }
        sum
    }
}

/// Factorials `0!..=n!` as `f64`.
///
/// Exact for `n <= 22` and within f64 relative precision far beyond any
/// practical moment order.
pub(crate) fn factorial_table(n: usize) -> Vec<f64> {
    let mut table = Vec::with_capacity(n + 1);
    let mut acc = 1.0;
    table.push(acc);
    for i in 1..=n {
        #[allow(clippy::cast_precision_loss)]
        {
            acc *= i as f64;
        }
        table.push(acc);
    }
    table
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn factorials() {
        let f = factorial_table(6);
        assert_eq!(f[0], 1.0);
        assert_eq!(f[1], 1.0);
        assert_eq!(f[5], 120.0);
        assert_eq!(f[6], 720.0);
    }

    #[test]
    fn integral_of_one_is_half() {
        let f = factorial_table(2);
        let one = TriPoly::one(0);
        assert!((one.integrate(&f) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn integral_of_u() {
        // \int_0^1 \int_0^{1-u} u dv du = 1/6
        let f = factorial_table(3);
        let u = TriPoly::linear(1, 0.0, 1.0, 0.0);
        assert!((u.integrate(&f) - 1.0 / 6.0).abs() < 1e-15);
    }

    #[test]
    fn integral_of_uv() {
        // \int u v = 1!1!/4! = 1/24
        let f = factorial_table(4);
        let u = TriPoly::linear(2, 0.0, 1.0, 0.0);
        let v = TriPoly::linear(2, 0.0, 0.0, 1.0);
        assert!((u.mul(&v).integrate(&f) - 1.0 / 24.0).abs() < 1e-15);
    }

    #[test]
    fn linear_pow_expands_binomial() {
        // (1 + u)^2 = 1 + 2u + u^2; integral = 1/2 + 2/6 + 2/24 = 11/12
        let f = factorial_table(4);
        let p = TriPoly::linear_pow(2, 1.0, 1.0, 0.0, 2);
        assert!((p.integrate(&f) - 11.0 / 12.0).abs() < 1e-15);
    }

    #[test]
    fn truncation_drops_high_degree_terms() {
        // (1 + u)^2 truncated at degree 1 keeps 1 + 2u: integral = 1/2 + 1/3
        let f = factorial_table(3);
        let p = TriPoly::linear_pow(1, 1.0, 1.0, 0.0, 2);
        assert!((p.integrate(&f) - (0.5 + 1.0 / 3.0)).abs() < 1e-15);
    }
}

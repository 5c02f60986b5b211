use crate::error::AlgebraError;
use crate::field::Gf256;
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A dense polynomial over GF(2^8).
///
/// Coefficients are stored with the highest-degree coefficient first.
/// Construction strips leading zeros, so two polynomials compare equal
/// exactly when their canonical forms match; the zero polynomial keeps a
/// single 0 coefficient. Values are immutable; every operation returns a
/// new polynomial.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Poly {
    coeffs: Vec<Gf256>,
}

impl Poly {
    /// Builds a polynomial from coefficients in order of decreasing power.
    pub fn new(coeffs: impl Into<Vec<Gf256>>) -> Poly {
        let mut coeffs = coeffs.into();
        let lead = coeffs.iter().take_while(|c| c.is_zero()).count();
        if lead == coeffs.len() {
            coeffs.clear();
            coeffs.push(Gf256::ZERO);
        } else {
            coeffs.drain(..lead);
        }
        Poly { coeffs }
    }

    /// Interprets bytes as coefficients, most significant byte first.
    pub fn from_bytes(bytes: &[u8]) -> Poly {
        Poly::new(bytes.iter().map(|&b| Gf256(b)).collect::<Vec<_>>())
    }

    /// The sparse constructor: `coeff * x^degree`.
    pub fn monomial(coeff: Gf256, degree: usize) -> Poly {
        let mut coeffs = vec![Gf256::ZERO; degree + 1];
        coeffs[0] = coeff;
        Poly::new(coeffs)
    }

    pub fn zero() -> Poly {
        Poly {
            coeffs: vec![Gf256::ZERO],
        }
    }

    pub fn one() -> Poly {
        Poly {
            coeffs: vec![Gf256::ONE],
        }
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Coefficients in order of decreasing power.
    pub fn coeffs(&self) -> &[Gf256] {
        &self.coeffs
    }

    /// The coefficient of `x^degree` (zero beyond the leading term).
    pub fn coefficient(&self, degree: usize) -> Gf256 {
        if degree > self.degree() {
            Gf256::ZERO
        } else {
            self.coeffs[self.coeffs.len() - 1 - degree]
        }
    }

    /// Multiplies every coefficient by a scalar.
    pub fn scale(&self, c: Gf256) -> Poly {
        Poly::new(self.coeffs.iter().map(|&a| a * c).collect::<Vec<_>>())
    }

    /// Multiplies by `x^k`.
    pub fn shift(&self, k: usize) -> Poly {
        if self.is_zero() || k == 0 {
            return self.clone();
        }
        let mut coeffs = self.coeffs.clone();
        coeffs.extend(std::iter::repeat(Gf256::ZERO).take(k));
        Poly { coeffs }
    }

    /// Evaluates the polynomial at `x` by Horner's method.
    pub fn eval(&self, x: Gf256) -> Gf256 {
        let mut acc = Gf256::ZERO;
        for &c in &self.coeffs {
            acc = acc * x + c;
        }
        acc
    }

    /// Long division, returning `(quotient, remainder)`.
    ///
    /// The divisor's leading coefficient need not be 1; its inverse is
    /// computed in the field. Dividing by the zero polynomial fails.
    pub fn div_rem(&self, divisor: &Poly) -> Result<(Poly, Poly), AlgebraError> {
        if divisor.is_zero() {
            return Err(AlgebraError::DivByZero);
        }
        if self.degree() < divisor.degree() || self.is_zero() {
            return Ok((Poly::zero(), self.clone()));
        }

        let lead_inv = divisor.coeffs[0].inverse()?;
        let mut rem = self.coeffs.clone();
        let qlen = self.degree() - divisor.degree() + 1;
        let mut quot = vec![Gf256::ZERO; qlen];
        for i in 0..qlen {
            let factor = rem[i] * lead_inv;
            if factor.is_zero() {
                continue;
            }
            quot[i] = factor;
            for (j, &d) in divisor.coeffs.iter().enumerate() {
                rem[i + j] = rem[i + j] - factor * d;
            }
        }
        let rem = rem.split_off(qlen);
        Ok((Poly::new(quot), Poly::new(rem)))
    }

    /// The remainder of long division by `divisor`.
    pub fn rem(&self, divisor: &Poly) -> Result<Poly, AlgebraError> {
        Ok(self.div_rem(divisor)?.1)
    }

    /// Low-order coefficients as bytes, left-zero-padded to `len`.
    ///
    /// This is the padded canonical form used for wire alignment. Panics
    /// if the polynomial has more than `len` coefficients.
    pub fn to_bytes_padded(&self, len: usize) -> Vec<u8> {
        assert!(self.coeffs.len() <= len, "polynomial wider than target");
        let mut out = vec![0u8; len - self.coeffs.len()];
        out.extend(self.coeffs.iter().map(|&c| c.0));
        out
    }
}

impl Add for &Poly {
    type Output = Poly;

    fn add(self, rhs: &Poly) -> Poly {
        let (long, short) = if self.coeffs.len() >= rhs.coeffs.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };
        let offset = long.coeffs.len() - short.coeffs.len();
        let mut coeffs = long.coeffs.clone();
        for (i, &c) in short.coeffs.iter().enumerate() {
            coeffs[offset + i] += c;
        }
        Poly::new(coeffs)
    }
}

impl Sub for &Poly {
    type Output = Poly;

    fn sub(self, rhs: &Poly) -> Poly {
        // Characteristic 2: subtraction is addition.
        self + rhs
    }
}

impl Mul for &Poly {
    type Output = Poly;

    fn mul(self, rhs: &Poly) -> Poly {
        if self.is_zero() || rhs.is_zero() {
            return Poly::zero();
        }
        let mut coeffs = vec![Gf256::ZERO; self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }
        Poly::new(coeffs)
    }
}

// Renders e.g. "3x^2 + 1".
impl fmt::Debug for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let deg = self.degree();
        let mut first = true;
        for (i, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() && deg > 0 {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            match deg - i {
                0 => write!(f, "{}", c.0)?,
                1 => write!(f, "{}x", c.0)?,
                p => write!(f, "{}x^{}", c.0, p)?,
            }
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}

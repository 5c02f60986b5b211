use crate::error::RsError;
use galois::{Gf256, Poly};

/// A Reed-Solomon encoder/decoder for a fixed (n, k) configuration.
///
/// The codec owns its generator polynomial
/// g(x) = (x - α^1)(x - α^2)...(x - α^(n-k)) and is immutable after
/// construction, so a single instance can be shared across threads and
/// reused for any number of encode/verify/decode calls.
#[derive(Debug, PartialEq)]
pub struct RsCodec {
    n: usize,
    k: usize,
    generator: Poly,
}

impl RsCodec {
    /// Creates a codec with codeword length `n` and message length `k`.
    ///
    /// Requires 1 <= n <= 255 and k < n. The resulting code corrects up
    /// to (n - k) / 2 byte errors per codeword.
    pub fn new(n: usize, k: usize) -> Result<RsCodec, RsError> {
        if n == 0 || n > 255 || k >= n {
            return Err(RsError::InvalidParameters { n, k });
        }

        let mut generator = Poly::one();
        for i in 1..=(n - k) as u32 {
            let factor = Poly::new(vec![Gf256::ONE, Gf256::ALPHA.pow(i)]);
            generator = &generator * &factor;
        }
        debug_assert_eq!(generator.degree(), n - k);

        Ok(RsCodec { n, k, generator })
    }

    /// The codeword length in bytes.
    pub fn n(&self) -> usize {
        self.n
    }

    /// The message length in bytes.
    pub fn k(&self) -> usize {
        self.k
    }

    /// The number of byte errors this code can correct per codeword.
    pub fn error_capacity(&self) -> usize {
        (self.n - self.k) / 2
    }

    /// The generator polynomial g(x), of degree n - k.
    pub fn generator(&self) -> &Poly {
        &self.generator
    }

    /// Encodes a message of at most k bytes into an n-byte codeword.
    ///
    /// The message is interpreted as left-zero-padded to k bytes; the
    /// output is those k bytes followed by n - k parity bytes.
    pub fn encode(&self, message: &[u8]) -> Result<Vec<u8>, RsError> {
        if message.len() > self.k {
            return Err(RsError::MessageTooLong {
                len: message.len(),
                k: self.k,
            });
        }

        // m(x) * x^(n-k), minus its remainder mod g, is a multiple of g.
        let shifted = Poly::from_bytes(message).shift(self.n - self.k);
        let parity = shifted
            .rem(&self.generator)
            .expect("generator polynomial is non-zero");
        let codeword = &shifted - &parity;
        Ok(codeword.to_bytes_padded(self.n))
    }

    /// Returns true iff the word is a valid codeword, i.e. divisible by
    /// the generator polynomial (equivalently, all syndromes are zero).
    pub fn verify(&self, word: &[u8]) -> bool {
        Poly::from_bytes(word)
            .rem(&self.generator)
            .map(|r| r.is_zero())
            .unwrap_or(false)
    }

    /// Decodes a received word, correcting up to `error_capacity()` byte
    /// errors, and strips the leading zero padding from the message.
    ///
    /// Stripping is lossy for binary data; see `decode_padded`.
    pub fn decode(&self, received: &[u8]) -> Result<Vec<u8>, RsError> {
        let mut message = self.decode_padded(received)?;
        let zeros = message.iter().take_while(|&&b| b == 0).count();
        message.drain(..zeros);
        Ok(message)
    }

    /// Decodes a received word, returning the full k-byte message with
    /// any leading zero padding intact.
    pub fn decode_padded(&self, received: &[u8]) -> Result<Vec<u8>, RsError> {
        if received.len() != self.n {
            return Err(RsError::LengthMismatch {
                len: received.len(),
                n: self.n,
            });
        }
        if self.verify(received) {
            return Ok(received[..self.k].to_vec());
        }

        let corrected = self.correct(&Poly::from_bytes(received))?;
        let mut bytes = corrected.to_bytes_padded(self.n);
        bytes.truncate(self.k);
        Ok(bytes)
    }

    // Runs the full correction pipeline on a word with non-zero syndromes.
    fn correct(&self, received: &Poly) -> Result<Poly, RsError> {
        let syndromes = self.syndromes(received);
        let (sigma, omega) = self.berlekamp_massey(&syndromes)?;
        let (locations, positions) = self.chien_search(&sigma);
        let magnitudes = self.forney(&omega, &locations)?;

        let mut error = Poly::zero();
        for (&position, &magnitude) in positions.iter().zip(&magnitudes) {
            if position >= self.n {
                // A root pointing outside the word cannot come from a
                // correctable error pattern.
                return Err(RsError::Uncorrectable);
            }
            error = &error + &Poly::monomial(magnitude, position);
        }

        let corrected = received - &error;
        if !corrected.rem(&self.generator)?.is_zero() {
            return Err(RsError::Uncorrectable);
        }
        Ok(corrected)
    }

    // Evaluates the received word at α^1 .. α^(n-k) and packs the results
    // into the syndrome polynomial S(z) = Σ S_l z^l, stored
    // highest-degree first as [S_{n-k}, ..., S_1, 0]. The constant term
    // stays zero.
    fn syndromes(&self, received: &Poly) -> Poly {
        let mut coeffs = Vec::with_capacity(self.n - self.k + 1);
        for l in (1..=(self.n - self.k) as u32).rev() {
            coeffs.push(received.eval(Gf256::ALPHA.pow(l)));
        }
        coeffs.push(Gf256::ZERO);
        Poly::new(coeffs)
    }

    // Berlekamp-Massey synthesis of the error locator σ(z) and error
    // evaluator ω(z), maintaining the auxiliary pair (τ, γ) and the
    // shift counters (D, B). After iteration l the invariant
    // (1 + S)·σ ≡ ω (mod z^(l+1)) holds.
    fn berlekamp_massey(&self, syndromes: &Poly) -> Result<(Poly, Poly), RsError> {
        let z = Poly::monomial(Gf256::ONE, 1);
        let one_plus_s = &Poly::one() + syndromes;

        let mut sigma = Poly::one();
        let mut omega = Poly::one();
        let mut tau = Poly::one();
        let mut gamma = Poly::zero();
        let mut d: usize = 0;
        let mut b: u8 = 0;

        for l in 0..(self.n - self.k) {
            // The discrepancy: the coefficient of z^(l+1) in (1 + S)·σ.
            let delta = (&one_plus_s * &sigma).coefficient(l + 1);

            let next_sigma = &sigma - &(&z * &tau).scale(delta);
            let next_omega = &omega - &(&z * &gamma).scale(delta);

            // Rule A shifts the auxiliaries; rule B substitutes the
            // pre-update pair scaled by Δ^(-1). Ties at 2D == l+1 are
            // broken by the B counter.
            let rule_a = delta.is_zero() || 2 * d > l + 1 || (2 * d == l + 1 && b == 0);
            if rule_a {
                tau = &z * &tau;
                gamma = &z * &gamma;
            } else {
                let inv = delta.inverse()?;
                tau = sigma.scale(inv);
                gamma = omega.scale(inv);
                d = l + 1 - d;
                b = 1 - b;
            }

            sigma = next_sigma;
            omega = next_omega;
        }

        Ok((sigma, omega))
    }

    // Finds the roots of σ by evaluating it at α^l for l = 1..=255.
    // A root at α^l marks an error at byte position j = 255 - l (counted
    // from the constant term) with location value X = α^j.
    fn chien_search(&self, sigma: &Poly) -> (Vec<Gf256>, Vec<usize>) {
        let mut locations = Vec::new();
        let mut positions = Vec::new();
        for l in 1..=255u32 {
            if sigma.eval(Gf256::ALPHA.pow(l)).is_zero() {
                locations.push(Gf256::ALPHA.pow(255 - l));
                positions.push(255 - l as usize);
            }
        }
        (locations, positions)
    }

    // Forney's formula for the error magnitude at each location:
    // Y_l = X_l^s · ω(X_l^(-1)) · X_l^(-1) / Π(X_l - X_m). The product
    // runs over s slots; slots beyond the found locations contribute a
    // bare X_l factor.
    fn forney(&self, omega: &Poly, locations: &[Gf256]) -> Result<Vec<Gf256>, RsError> {
        let s = self.error_capacity();
        let mut magnitudes = Vec::with_capacity(locations.len());
        for (l, &xl) in locations.iter().enumerate() {
            let xl_inv = xl.inverse()?;
            let mut y = xl.pow(s as u32) * omega.eval(xl_inv) * xl_inv;

            let mut product = Gf256::ONE;
            for m in 0..s {
                if m == l {
                    continue;
                }
                let xm = locations.get(m).copied().unwrap_or(Gf256::ZERO);
                product *= xl - xm;
            }
            y *= product.inverse()?;
            magnitudes.push(y);
        }
        Ok(magnitudes)
    }
}

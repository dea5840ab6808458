//! Generators for the quadratic and cubic tower steps
//!
//! `quad_ext!(Name, Base, frb)` defines Base[w]/(w^2 - θ) and
//! `cubic_ext!(Name, Base, frb)` defines Base[y]/(y^3 - θ), where θ is the
//! generator of `Base` (its `ExtField::mul_gen`). `frb` names the
//! [`Tower`](super::Tower) method applying the Frobenius of the root field.
//!
//! The expansion site must have `Field` and `ExtField` in scope.

// ============================================================================
// Quadratic steps
// ============================================================================

macro_rules! quad_ext {
    ($(#[$doc:meta])* $name:ident, $base:ident, $frb:ident) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug)]
        pub struct $name<P: FpParams> {
            /// Constant coordinate
            pub c0: $base<P>,
            /// Coordinate of the adjoined root
            pub c1: $base<P>,
        }

        impl<P: FpParams> $name<P> {
            /// Element from its coordinates
            #[inline]
            pub const fn new(c0: $base<P>, c1: $base<P>) -> Self {
                $name { c0, c1 }
            }

            /// a - b w
            pub fn conj(&self) -> Self {
                $name::new(self.c0, Field::neg(&self.c1))
            }

            /// Multiply by the adjoined root w
            pub fn mul_art(&self) -> Self {
                $name::new(ExtField::mul_gen(&self.c1), self.c0)
            }

            /// Schoolbook product, kept to cross-check Karatsuba
            pub fn mul_basic(&self, rhs: &Self) -> Self {
                let c0 = Field::add(
                    &Field::mul(&self.c0, &rhs.c0),
                    &ExtField::mul_gen(&Field::mul(&self.c1, &rhs.c1)),
                );
                let c1 = Field::add(&Field::mul(&self.c0, &rhs.c1), &Field::mul(&self.c1, &rhs.c0));
                $name::new(c0, c1)
            }
        }

        impl<P: FpParams> Default for $name<P> {
            fn default() -> Self {
                <Self as Field>::zero()
            }
        }

        impl<P: FpParams> zeroize::DefaultIsZeroes for $name<P> {}

        impl<P: FpParams> subtle::ConstantTimeEq for $name<P> {
            fn ct_eq(&self, other: &Self) -> subtle::Choice {
                subtle::ConstantTimeEq::ct_eq(&self.c0, &other.c0)
                    & subtle::ConstantTimeEq::ct_eq(&self.c1, &other.c1)
            }
        }

        impl<P: FpParams> PartialEq for $name<P> {
            fn eq(&self, other: &Self) -> bool {
                subtle::ConstantTimeEq::ct_eq(self, other).into()
            }
        }

        impl<P: FpParams> Eq for $name<P> {}

        impl<P: FpParams> subtle::ConditionallySelectable for $name<P> {
            fn conditional_select(a: &Self, b: &Self, choice: subtle::Choice) -> Self {
                $name::new(
                    subtle::ConditionallySelectable::conditional_select(&a.c0, &b.c0, choice),
                    subtle::ConditionallySelectable::conditional_select(&a.c1, &b.c1, choice),
                )
            }
        }

        impl<P: FpParams> relic_api::Serialize for $name<P> {
            fn size_bin(&self, _pack: bool) -> usize {
                <Self as Field>::BYTES
            }

            fn write_bin(&self, out: &mut [u8], _pack: bool) -> $crate::error::Result<()> {
                $crate::error::validate::length(
                    concat!(stringify!($name), "_write_bin"),
                    out.len(),
                    <Self as Field>::BYTES,
                )?;
                let (a, b) = out.split_at_mut(<$base<P> as Field>::BYTES);
                relic_api::Serialize::write_bin(&self.c0, a, false)?;
                relic_api::Serialize::write_bin(&self.c1, b, false)
            }

            fn read_bin(bytes: &[u8]) -> $crate::error::Result<Self> {
                $crate::error::validate::length(
                    concat!(stringify!($name), "_read_bin"),
                    bytes.len(),
                    <Self as Field>::BYTES,
                )?;
                let (a, b) = bytes.split_at(<$base<P> as Field>::BYTES);
                Ok($name::new(
                    <$base<P> as relic_api::Serialize>::read_bin(a)?,
                    <$base<P> as relic_api::Serialize>::read_bin(b)?,
                ))
            }
        }

        impl<P: FpParams> Field for $name<P> {
            type Prime = P;
            const DEGREE: usize = 2 * <$base<P> as Field>::DEGREE;
            const BYTES: usize = 2 * <$base<P> as Field>::BYTES;

            fn zero() -> Self {
                $name::new(<$base<P> as Field>::zero(), <$base<P> as Field>::zero())
            }

            fn one() -> Self {
                $name::new(<$base<P> as Field>::one(), <$base<P> as Field>::zero())
            }

            fn from_dig(d: $crate::bn::Dig) -> Self {
                $name::new(<$base<P> as Field>::from_dig(d), <$base<P> as Field>::zero())
            }

            fn from_base(a: Fp<P>) -> Self {
                $name::new(<$base<P> as Field>::from_base(a), <$base<P> as Field>::zero())
            }

            fn is_zero(&self) -> bool {
                self.c0.is_zero() && self.c1.is_zero()
            }

            fn add(&self, rhs: &Self) -> Self {
                $name::new(Field::add(&self.c0, &rhs.c0), Field::add(&self.c1, &rhs.c1))
            }

            fn sub(&self, rhs: &Self) -> Self {
                $name::new(Field::sub(&self.c0, &rhs.c0), Field::sub(&self.c1, &rhs.c1))
            }

            fn neg(&self) -> Self {
                $name::new(Field::neg(&self.c0), Field::neg(&self.c1))
            }

            fn dbl(&self) -> Self {
                $name::new(Field::dbl(&self.c0), Field::dbl(&self.c1))
            }

            fn hlv(&self) -> Self {
                $name::new(Field::hlv(&self.c0), Field::hlv(&self.c1))
            }

            fn mul(&self, rhs: &Self) -> Self {
                let v0 = Field::mul(&self.c0, &rhs.c0);
                let v1 = Field::mul(&self.c1, &rhs.c1);
                let t = Field::mul(
                    &Field::add(&self.c0, &self.c1),
                    &Field::add(&rhs.c0, &rhs.c1),
                );
                $name::new(
                    Field::add(&v0, &ExtField::mul_gen(&v1)),
                    Field::sub(&Field::sub(&t, &v0), &v1),
                )
            }

            fn sqr(&self) -> Self {
                let v = Field::mul(&self.c0, &self.c1);
                let t = Field::mul(
                    &Field::add(&self.c0, &self.c1),
                    &Field::add(&self.c0, &ExtField::mul_gen(&self.c1)),
                );
                $name::new(
                    Field::sub(&Field::sub(&t, &v), &ExtField::mul_gen(&v)),
                    Field::dbl(&v),
                )
            }

            fn mul_fp(&self, k: &Fp<P>) -> Self {
                $name::new(Field::mul_fp(&self.c0, k), Field::mul_fp(&self.c1, k))
            }

            fn inv(&self) -> $crate::error::Result<Self> {
                let t = Field::sub(
                    &Field::sqr(&self.c0),
                    &ExtField::mul_gen(&Field::sqr(&self.c1)),
                );
                let t = Field::inv(&t)?;
                Ok($name::new(
                    Field::mul(&self.c0, &t),
                    Field::neg(&Field::mul(&self.c1, &t)),
                ))
            }

            fn frb(&self, tower: &Tower<P>, i: usize) -> Self {
                let mut r = *self;
                for _ in 0..i % <Self as Field>::DEGREE {
                    r = tower.$frb(&r);
                }
                r
            }

            fn norm(&self) -> Fp<P> {
                Field::norm(&Field::sub(
                    &Field::sqr(&self.c0),
                    &ExtField::mul_gen(&Field::sqr(&self.c1)),
                ))
            }

            fn srt(&self) -> Option<Self> {
                if Field::is_zero(self) {
                    return Some(*self);
                }
                let (a, b) = $crate::fpx::srt_quad(&self.c0, &self.c1, |x| ExtField::mul_gen(x))?;
                let r = $name::new(a, b);
                if Field::sqr(&r) == *self {
                    Some(r)
                } else {
                    None
                }
            }

            fn sgn0(&self) -> bool {
                Field::sgn0(&self.c0) || (Field::is_zero(&self.c0) && Field::sgn0(&self.c1))
            }

            fn rand<R: rand::RngCore + rand::CryptoRng + ?Sized>(rng: &mut R) -> Self {
                $name::new(<$base<P> as Field>::rand(rng), <$base<P> as Field>::rand(rng))
            }

            fn from_uniform(bytes: &[u8]) -> $crate::error::Result<Self> {
                $crate::error::validate::parameter(
                    bytes.len() % 2 == 0,
                    concat!(stringify!($name), "_from_uniform"),
                )?;
                let (a, b) = bytes.split_at(bytes.len() / 2);
                Ok($name::new(
                    <$base<P> as Field>::from_uniform(a)?,
                    <$base<P> as Field>::from_uniform(b)?,
                ))
            }
        }

        impl<P: FpParams> ExtField for $name<P> {
            type Root = <$base<P> as ExtField>::Root;
            const ROOT_DEG: usize = 2 * <$base<P> as ExtField>::ROOT_DEG;

            fn mul_gen(&self) -> Self {
                self.mul_art()
            }

            fn to_root(&self, out: &mut [Self::Root]) {
                let n = <$base<P> as ExtField>::ROOT_DEG;
                let mut t = [<Self::Root as Field>::zero(); $crate::fpx::MAX_ROOT_DEG];
                self.c0.to_root(&mut t[..n]);
                for m in 0..n {
                    out[2 * m] = t[m];
                }
                self.c1.to_root(&mut t[..n]);
                for m in 0..n {
                    out[2 * m + 1] = t[m];
                }
            }

            fn from_root(c: &[Self::Root]) -> Self {
                let n = <$base<P> as ExtField>::ROOT_DEG;
                let mut a = [<Self::Root as Field>::zero(); $crate::fpx::MAX_ROOT_DEG];
                let mut b = [<Self::Root as Field>::zero(); $crate::fpx::MAX_ROOT_DEG];
                for m in 0..n {
                    a[m] = c[2 * m];
                    b[m] = c[2 * m + 1];
                }
                $name::new(
                    <$base<P> as ExtField>::from_root(&a[..n]),
                    <$base<P> as ExtField>::from_root(&b[..n]),
                )
            }
        }

        $crate::field::impl_field_ops!($name);
    };
}

// ============================================================================
// Cubic steps
// ============================================================================

macro_rules! cubic_ext {
    ($(#[$doc:meta])* $name:ident, $base:ident, $frb:ident) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug)]
        pub struct $name<P: FpParams> {
            /// Constant coordinate
            pub c0: $base<P>,
            /// Coordinate of the adjoined root y
            pub c1: $base<P>,
            /// Coordinate of y^2
            pub c2: $base<P>,
        }

        impl<P: FpParams> $name<P> {
            /// Element from its coordinates
            #[inline]
            pub const fn new(c0: $base<P>, c1: $base<P>, c2: $base<P>) -> Self {
                $name { c0, c1, c2 }
            }

            /// Multiply by the adjoined root y
            pub fn mul_art(&self) -> Self {
                $name::new(ExtField::mul_gen(&self.c2), self.c0, self.c1)
            }

            /// Norm to the base: a0^3 + θ a1^3 + θ^2 a2^3 - 3θ a0 a1 a2
            pub fn norm_rel(&self) -> $base<P> {
                let (a0, a1, a2) = (&self.c0, &self.c1, &self.c2);
                let t0 = Field::mul(&Field::sqr(a0), a0);
                let t1 = ExtField::mul_gen(&Field::mul(&Field::sqr(a1), a1));
                let t2 = ExtField::mul_gen(&ExtField::mul_gen(&Field::mul(&Field::sqr(a2), a2)));
                let t3 = ExtField::mul_gen(&Field::mul(&Field::mul(a0, a1), a2));
                let t3 = Field::add(&Field::dbl(&t3), &t3);
                Field::sub(&Field::add(&Field::add(&t0, &t1), &t2), &t3)
            }

            /// Schoolbook product, kept to cross-check the interpolation
            pub fn mul_basic(&self, rhs: &Self) -> Self {
                let m = |x: &$base<P>, y: &$base<P>| Field::mul(x, y);
                let g = |x: &$base<P>| ExtField::mul_gen(x);
                let c0 = Field::add(
                    &m(&self.c0, &rhs.c0),
                    &g(&Field::add(&m(&self.c1, &rhs.c2), &m(&self.c2, &rhs.c1))),
                );
                let c1 = Field::add(
                    &Field::add(&m(&self.c0, &rhs.c1), &m(&self.c1, &rhs.c0)),
                    &g(&m(&self.c2, &rhs.c2)),
                );
                let c2 = Field::add(
                    &Field::add(&m(&self.c0, &rhs.c2), &m(&self.c1, &rhs.c1)),
                    &m(&self.c2, &rhs.c0),
                );
                $name::new(c0, c1, c2)
            }
        }

        impl<P: FpParams> Default for $name<P> {
            fn default() -> Self {
                <Self as Field>::zero()
            }
        }

        impl<P: FpParams> zeroize::DefaultIsZeroes for $name<P> {}

        impl<P: FpParams> subtle::ConstantTimeEq for $name<P> {
            fn ct_eq(&self, other: &Self) -> subtle::Choice {
                subtle::ConstantTimeEq::ct_eq(&self.c0, &other.c0)
                    & subtle::ConstantTimeEq::ct_eq(&self.c1, &other.c1)
                    & subtle::ConstantTimeEq::ct_eq(&self.c2, &other.c2)
            }
        }

        impl<P: FpParams> PartialEq for $name<P> {
            fn eq(&self, other: &Self) -> bool {
                subtle::ConstantTimeEq::ct_eq(self, other).into()
            }
        }

        impl<P: FpParams> Eq for $name<P> {}

        impl<P: FpParams> subtle::ConditionallySelectable for $name<P> {
            fn conditional_select(a: &Self, b: &Self, choice: subtle::Choice) -> Self {
                $name::new(
                    subtle::ConditionallySelectable::conditional_select(&a.c0, &b.c0, choice),
                    subtle::ConditionallySelectable::conditional_select(&a.c1, &b.c1, choice),
                    subtle::ConditionallySelectable::conditional_select(&a.c2, &b.c2, choice),
                )
            }
        }

        impl<P: FpParams> relic_api::Serialize for $name<P> {
            fn size_bin(&self, _pack: bool) -> usize {
                <Self as Field>::BYTES
            }

            fn write_bin(&self, out: &mut [u8], _pack: bool) -> $crate::error::Result<()> {
                $crate::error::validate::length(
                    concat!(stringify!($name), "_write_bin"),
                    out.len(),
                    <Self as Field>::BYTES,
                )?;
                let n = <$base<P> as Field>::BYTES;
                relic_api::Serialize::write_bin(&self.c0, &mut out[..n], false)?;
                relic_api::Serialize::write_bin(&self.c1, &mut out[n..2 * n], false)?;
                relic_api::Serialize::write_bin(&self.c2, &mut out[2 * n..], false)
            }

            fn read_bin(bytes: &[u8]) -> $crate::error::Result<Self> {
                $crate::error::validate::length(
                    concat!(stringify!($name), "_read_bin"),
                    bytes.len(),
                    <Self as Field>::BYTES,
                )?;
                let n = <$base<P> as Field>::BYTES;
                Ok($name::new(
                    <$base<P> as relic_api::Serialize>::read_bin(&bytes[..n])?,
                    <$base<P> as relic_api::Serialize>::read_bin(&bytes[n..2 * n])?,
                    <$base<P> as relic_api::Serialize>::read_bin(&bytes[2 * n..])?,
                ))
            }
        }

        impl<P: FpParams> Field for $name<P> {
            type Prime = P;
            const DEGREE: usize = 3 * <$base<P> as Field>::DEGREE;
            const BYTES: usize = 3 * <$base<P> as Field>::BYTES;

            fn zero() -> Self {
                let z = <$base<P> as Field>::zero();
                $name::new(z, z, z)
            }

            fn one() -> Self {
                let z = <$base<P> as Field>::zero();
                $name::new(<$base<P> as Field>::one(), z, z)
            }

            fn from_dig(d: $crate::bn::Dig) -> Self {
                let z = <$base<P> as Field>::zero();
                $name::new(<$base<P> as Field>::from_dig(d), z, z)
            }

            fn from_base(a: Fp<P>) -> Self {
                let z = <$base<P> as Field>::zero();
                $name::new(<$base<P> as Field>::from_base(a), z, z)
            }

            fn is_zero(&self) -> bool {
                self.c0.is_zero() && self.c1.is_zero() && self.c2.is_zero()
            }

            fn add(&self, rhs: &Self) -> Self {
                $name::new(
                    Field::add(&self.c0, &rhs.c0),
                    Field::add(&self.c1, &rhs.c1),
                    Field::add(&self.c2, &rhs.c2),
                )
            }

            fn sub(&self, rhs: &Self) -> Self {
                $name::new(
                    Field::sub(&self.c0, &rhs.c0),
                    Field::sub(&self.c1, &rhs.c1),
                    Field::sub(&self.c2, &rhs.c2),
                )
            }

            fn neg(&self) -> Self {
                $name::new(Field::neg(&self.c0), Field::neg(&self.c1), Field::neg(&self.c2))
            }

            fn dbl(&self) -> Self {
                $name::new(Field::dbl(&self.c0), Field::dbl(&self.c1), Field::dbl(&self.c2))
            }

            fn hlv(&self) -> Self {
                $name::new(Field::hlv(&self.c0), Field::hlv(&self.c1), Field::hlv(&self.c2))
            }

            fn mul(&self, rhs: &Self) -> Self {
                let (a, b) = (self, rhs);
                let v0 = Field::mul(&a.c0, &b.c0);
                let v1 = Field::mul(&a.c1, &b.c1);
                let v2 = Field::mul(&a.c2, &b.c2);
                let t0 = Field::mul(&Field::add(&a.c1, &a.c2), &Field::add(&b.c1, &b.c2));
                let t1 = Field::mul(&Field::add(&a.c0, &a.c1), &Field::add(&b.c0, &b.c1));
                let t2 = Field::mul(&Field::add(&a.c0, &a.c2), &Field::add(&b.c0, &b.c2));
                let c0 = Field::add(&v0, &ExtField::mul_gen(&Field::sub(&Field::sub(&t0, &v1), &v2)));
                let c1 = Field::add(&Field::sub(&Field::sub(&t1, &v0), &v1), &ExtField::mul_gen(&v2));
                let c2 = Field::add(&Field::sub(&Field::sub(&t2, &v0), &v2), &v1);
                $name::new(c0, c1, c2)
            }

            fn sqr(&self) -> Self {
                let (a0, a1, a2) = (&self.c0, &self.c1, &self.c2);
                let s0 = Field::sqr(a0);
                let s1 = Field::dbl(&Field::mul(a0, a1));
                let s2 = Field::sqr(&Field::add(&Field::sub(a0, a1), a2));
                let s3 = Field::dbl(&Field::mul(a1, a2));
                let s4 = Field::sqr(a2);
                let c0 = Field::add(&s0, &ExtField::mul_gen(&s3));
                let c1 = Field::add(&s1, &ExtField::mul_gen(&s4));
                let c2 = Field::sub(&Field::sub(&Field::add(&Field::add(&s1, &s2), &s3), &s0), &s4);
                $name::new(c0, c1, c2)
            }

            fn mul_fp(&self, k: &Fp<P>) -> Self {
                $name::new(
                    Field::mul_fp(&self.c0, k),
                    Field::mul_fp(&self.c1, k),
                    Field::mul_fp(&self.c2, k),
                )
            }

            fn inv(&self) -> $crate::error::Result<Self> {
                let (a, b, c) = (&self.c0, &self.c1, &self.c2);
                let t0 = Field::sub(&Field::sqr(a), &ExtField::mul_gen(&Field::mul(b, c)));
                let t1 = Field::sub(&ExtField::mul_gen(&Field::sqr(c)), &Field::mul(a, b));
                let t2 = Field::sub(&Field::sqr(b), &Field::mul(a, c));
                let d = Field::add(
                    &Field::mul(a, &t0),
                    &ExtField::mul_gen(&Field::add(&Field::mul(c, &t1), &Field::mul(b, &t2))),
                );
                let d = Field::inv(&d)?;
                Ok($name::new(Field::mul(&t0, &d), Field::mul(&t1, &d), Field::mul(&t2, &d)))
            }

            fn frb(&self, tower: &Tower<P>, i: usize) -> Self {
                let mut r = *self;
                for _ in 0..i % <Self as Field>::DEGREE {
                    r = tower.$frb(&r);
                }
                r
            }

            fn norm(&self) -> Fp<P> {
                Field::norm(&self.norm_rel())
            }

            fn srt(&self) -> Option<Self> {
                if Field::is_zero(self) {
                    return Some(*self);
                }
                let z = <$base<P> as Field>::zero();
                let r = $crate::fpx::srt_cubic(self, &self.norm_rel(), |k| $name::new(k, z, z))?;
                if Field::sqr(&r) == *self {
                    Some(r)
                } else {
                    None
                }
            }

            fn sgn0(&self) -> bool {
                let z0 = Field::is_zero(&self.c0);
                let z1 = Field::is_zero(&self.c1);
                Field::sgn0(&self.c0)
                    || (z0 && Field::sgn0(&self.c1))
                    || (z0 && z1 && Field::sgn0(&self.c2))
            }

            fn rand<R: rand::RngCore + rand::CryptoRng + ?Sized>(rng: &mut R) -> Self {
                $name::new(
                    <$base<P> as Field>::rand(rng),
                    <$base<P> as Field>::rand(rng),
                    <$base<P> as Field>::rand(rng),
                )
            }

            fn from_uniform(bytes: &[u8]) -> $crate::error::Result<Self> {
                $crate::error::validate::parameter(
                    bytes.len() % 3 == 0,
                    concat!(stringify!($name), "_from_uniform"),
                )?;
                let n = bytes.len() / 3;
                Ok($name::new(
                    <$base<P> as Field>::from_uniform(&bytes[..n])?,
                    <$base<P> as Field>::from_uniform(&bytes[n..2 * n])?,
                    <$base<P> as Field>::from_uniform(&bytes[2 * n..])?,
                ))
            }
        }

        impl<P: FpParams> ExtField for $name<P> {
            type Root = <$base<P> as ExtField>::Root;
            const ROOT_DEG: usize = 3 * <$base<P> as ExtField>::ROOT_DEG;

            fn mul_gen(&self) -> Self {
                self.mul_art()
            }

            fn to_root(&self, out: &mut [Self::Root]) {
                let n = <$base<P> as ExtField>::ROOT_DEG;
                let mut t = [<Self::Root as Field>::zero(); $crate::fpx::MAX_ROOT_DEG];
                for (j, c) in [&self.c0, &self.c1, &self.c2].into_iter().enumerate() {
                    c.to_root(&mut t[..n]);
                    for m in 0..n {
                        out[3 * m + j] = t[m];
                    }
                }
            }

            fn from_root(c: &[Self::Root]) -> Self {
                let n = <$base<P> as ExtField>::ROOT_DEG;
                let mut t = [[<Self::Root as Field>::zero(); $crate::fpx::MAX_ROOT_DEG]; 3];
                for m in 0..n {
                    for j in 0..3 {
                        t[j][m] = c[3 * m + j];
                    }
                }
                $name::new(
                    <$base<P> as ExtField>::from_root(&t[0][..n]),
                    <$base<P> as ExtField>::from_root(&t[1][..n]),
                    <$base<P> as ExtField>::from_root(&t[2][..n]),
                )
            }
        }

        $crate::field::impl_field_ops!($name);
    };
}

pub(crate) use cubic_ext;
pub(crate) use quad_ext;

//! Sign checks for primitive numbers and range clamping.

/// Sign checks for primitive integers and floats.
///
/// The comparisons are strict, so `-0.0` is neither greater nor less than
/// zero and `NaN` is neither.
///
/// # Examples
///
/// ```rust
/// use convenient_collections::extension::NumericExtension;
///
/// assert!(0_u32.is_zero());
/// assert!(1.5_f64.is_greater_than_zero());
/// assert!(!0_usize.is_less_than_zero());
/// assert!(f64::NAN.is_not_zero());
/// ```
pub trait NumericExtension: Copy + PartialOrd {
    /// The additive identity.
    const ZERO: Self;

    /// Returns `true` if the value equals zero.
    #[inline]
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Returns `true` if the value does not equal zero.
    #[inline]
    fn is_not_zero(self) -> bool {
        !self.is_zero()
    }

    /// Returns `true` if the value is strictly greater than zero.
    #[inline]
    fn is_greater_than_zero(self) -> bool {
        self > Self::ZERO
    }

    /// Returns `true` if the value is strictly less than zero.
    #[inline]
    fn is_less_than_zero(self) -> bool {
        self < Self::ZERO
    }
}

macro_rules! impl_numeric_extension {
    ($zero:expr => $($numeric:ty),* $(,)?) => {
        $(
            impl NumericExtension for $numeric {
                const ZERO: Self = $zero;
            }
        )*
    };
}

impl_numeric_extension!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric_extension!(0.0 => f32, f64);

/// Zero checks for optional numbers, treating `None` like zero.
pub trait OptionNumericExtension {
    /// Returns `true` if the value is `None` or zero.
    fn is_zero_or_none(&self) -> bool;

    /// Returns `true` if the value is present and not zero.
    fn is_not_zero_nor_none(&self) -> bool;
}

impl<N: NumericExtension> OptionNumericExtension for Option<N> {
    #[inline]
    fn is_zero_or_none(&self) -> bool {
        self.is_none_or(N::is_zero)
    }

    #[inline]
    fn is_not_zero_nor_none(&self) -> bool {
        !self.is_zero_or_none()
    }
}

/// Clamps `value` into `[min, max]`.
///
/// Computed as `min(max, max(min, value))`, so when `min > max` the upper
/// bound wins. Unlike [`Ord::clamp`] this never panics and works for any
/// `PartialOrd` type.
///
/// # Examples
///
/// ```rust
/// use convenient_collections::extension::unify;
///
/// assert_eq!(unify(0, -5, 10), 0);
/// assert_eq!(unify(0, 5, 10), 5);
/// assert_eq!(unify(0.0, 12.5, 10.0), 10.0);
/// assert_eq!(unify(10, 5, 0), 0);
/// ```
pub fn unify<T: PartialOrd>(min: T, value: T, max: T) -> T {
    let lower_bounded = if value < min { min } else { value };
    if max < lower_bounded { max } else { lower_bounded }
}

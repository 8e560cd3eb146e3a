use crate::error::{Error, Result};

/// Extends functionality for slices of float arrays
pub trait SliceExt<T> {
    /// Find the minimum value in float arrays
    ///
    /// Only provides the minimum value from a collection of valid numbers. Any
    /// NAN values, infinite values, or empty slices will return an error.
    ///
    /// ```rust
    /// # use voltools_utils::SliceExt;
    /// # use voltools_utils::Error;
    /// // Successful cases
    /// assert_eq!([1.1_f32, 0.5, 2.2].try_min(), Ok(0.5));
    /// assert_eq!([1.1, f32::MIN, 2.2].try_min(), Ok(f32::MIN));
    ///
    /// // Error cases
    /// assert_eq!([1.1, f32::NAN, 2.2].try_min(), Err(Error::SliceContainsUndefinedValues));
    /// assert_eq!([1.1, f32::INFINITY, 2.2].try_min(), Err(Error::SliceContainsUndefinedValues));
    /// assert_eq!(Vec::<f32>::new().try_min(), Err(Error::SliceContainsNoValues));
    /// ```
    ///
    /// The float primitives (`f32`/`f64`) do not implement `Ord` due to `NaN`
    /// being incomparable. Calling `min()` on a collection of floats is
    /// therefore not implemented in the standard library.
    ///
    /// This extension uses `total_cmp` to always produce an ordering in
    /// accordance to the totalOrder predicate as defined in the IEEE 754 (2008
    /// revision) floating point standard.
    fn try_min(&self) -> Result<T>;

    /// Find the maximum value in float arrays
    ///
    /// Only provides the maximum value from a collection of valid numbers. Any
    /// NAN values, infinite values, or empty slices will return an error.
    ///
    /// ```rust
    /// # use voltools_utils::SliceExt;
    /// # use voltools_utils::Error;
    /// // Successful cases
    /// assert_eq!([1.1_f64, 0.5, 2.2].try_max(), Ok(2.2));
    /// assert_eq!([1.1, f64::MAX, 2.2].try_max(), Ok(f64::MAX));
    ///
    /// // Error cases
    /// assert_eq!([1.1, f64::NAN, 2.2].try_max(), Err(Error::SliceContainsUndefinedValues));
    /// assert_eq!(Vec::<f64>::new().try_max(), Err(Error::SliceContainsNoValues));
    /// ```
    fn try_max(&self) -> Result<T>;

    /// Find both the minimum and maximum in a single call
    ///
    /// Same rules as [try_min()](SliceExt::try_min) and
    /// [try_max()](SliceExt::try_max), returned as `(min, max)`.
    ///
    /// ```rust
    /// # use voltools_utils::SliceExt;
    /// assert_eq!([3.0_f32, -1.5, 2.0].try_min_max(), Ok((-1.5, 3.0)));
    /// assert!(Vec::<f32>::new().try_min_max().is_err());
    /// ```
    fn try_min_max(&self) -> Result<(T, T)> {
        Ok((self.try_min()?, self.try_max()?))
    }
}

/// Identical implementations for both float primitives
macro_rules! impl_slice_ext {
    ($t:ty) => {
        impl SliceExt<$t> for [$t] {
            fn try_min(&self) -> Result<$t> {
                if self.iter().any(|v| !v.is_finite()) {
                    return Err(Error::SliceContainsUndefinedValues);
                };

                if let Some(v) = self.iter().min_by(|a, b| a.total_cmp(b)).copied() {
                    Ok(v)
                } else {
                    Err(Error::SliceContainsNoValues)
                }
            }

            fn try_max(&self) -> Result<$t> {
                if self.iter().any(|v| !v.is_finite()) {
                    return Err(Error::SliceContainsUndefinedValues);
                };

                if let Some(v) = self.iter().max_by(|a, b| a.total_cmp(b)).copied() {
                    Ok(v)
                } else {
                    Err(Error::SliceContainsNoValues)
                }
            }
        }
    };
}

impl_slice_ext!(f32);
impl_slice_ext!(f64);

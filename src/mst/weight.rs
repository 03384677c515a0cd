use num_traits::{CheckedAdd, Zero};

/// Edge weight the builder can order and sum into a tree total.
pub trait Weight: Copy + PartialOrd + Zero {
    /// `self + rhs`, or `None` if the sum does not fit.
    fn accumulate(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_checked {
    ($($t:ty)*) => {$(
        impl Weight for $t {
            fn accumulate(self, rhs: Self) -> Option<Self> {
                CheckedAdd::checked_add(&self, &rhs)
            }
        }
    )*};
}

impl_checked!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

// A finite total that turns infinite has overflowed.
macro_rules! impl_float {
    ($($t:ty)*) => {$(
        impl Weight for $t {
            fn accumulate(self, rhs: Self) -> Option<Self> {
                let sum = self + rhs;
                (sum.is_finite() || !self.is_finite() || !rhs.is_finite()).then_some(sum)
            }
        }
    )*};
}

impl_float!(f32 f64);

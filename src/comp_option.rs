//! Comparisons of [`Optional`] against another [`Optional`], [`NoValue`], and plain values
//!
//! An empty [`Optional`] is the smallest.

use core::cmp::Ordering;

use crate::{marker::NoValue, optional::Optional};

impl<T, U> PartialEq<Optional<U>> for Optional<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Optional<U>) -> bool {
        match (self.as_option(), other.as_option()) {
            (None, None) => true,
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}
impl<T> Eq for Optional<T> where T: Eq {}
impl<T, U> PartialOrd<Optional<U>> for Optional<T>
where
    T: PartialOrd<U>,
{
    fn partial_cmp(&self, other: &Optional<U>) -> Option<Ordering> {
        match (self.as_option(), other.as_option()) {
            (None, None) => Some(Ordering::Equal),
            (None, Some(_)) => Some(Ordering::Less),
            (Some(_), None) => Some(Ordering::Greater),
            (Some(a), Some(b)) => a.partial_cmp(b),
        }
    }
}
impl<T> Ord for Optional<T>
where
    T: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.as_option(), other.as_option()) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => a.cmp(b),
        }
    }
}

impl<T> PartialEq<NoValue> for Optional<T> {
    fn eq(&self, _: &NoValue) -> bool {
        !self.has_value()
    }
}
impl<T> PartialEq<Optional<T>> for NoValue {
    fn eq(&self, other: &Optional<T>) -> bool {
        !other.has_value()
    }
}
impl<T> PartialOrd<NoValue> for Optional<T> {
    fn partial_cmp(&self, _: &NoValue) -> Option<Ordering> {
        Some(match self.has_value() {
            true => Ordering::Greater,
            false => Ordering::Equal,
        })
    }
}
impl<T> PartialOrd<Optional<T>> for NoValue {
    fn partial_cmp(&self, other: &Optional<T>) -> Option<Ordering> {
        Some(match other.has_value() {
            true => Ordering::Less,
            false => Ordering::Equal,
        })
    }
}

pub fn eq_value<T, U>(opt: &Optional<T>, value: &U) -> bool
where
    T: PartialEq<U>,
    U: ?Sized,
{
    opt.as_option().is_some_and(|held| held == value)
}

pub fn ne_value<T, U>(opt: &Optional<T>, value: &U) -> bool
where
    T: PartialEq<U>,
    U: ?Sized,
{
    opt.as_option().is_none_or(|held| held != value)
}

pub fn lt_value<T, U>(opt: &Optional<T>, value: &U) -> bool
where
    T: PartialOrd<U>,
    U: ?Sized,
{
    opt.as_option().is_none_or(|held| held < value)
}

pub fn le_value<T, U>(opt: &Optional<T>, value: &U) -> bool
where
    T: PartialOrd<U>,
    U: ?Sized,
{
    opt.as_option().is_none_or(|held| held <= value)
}

pub fn gt_value<T, U>(opt: &Optional<T>, value: &U) -> bool
where
    T: PartialOrd<U>,
    U: ?Sized,
{
    opt.as_option().is_some_and(|held| held > value)
}

pub fn ge_value<T, U>(opt: &Optional<T>, value: &U) -> bool
where
    T: PartialOrd<U>,
    U: ?Sized,
{
    opt.as_option().is_some_and(|held| held >= value)
}

pub fn value_eq<U, T>(value: &U, opt: &Optional<T>) -> bool
where
    U: PartialEq<T> + ?Sized,
{
    opt.as_option().is_some_and(|held| value == held)
}

pub fn value_ne<U, T>(value: &U, opt: &Optional<T>) -> bool
where
    U: PartialEq<T> + ?Sized,
{
    opt.as_option().is_none_or(|held| value != held)
}

pub fn value_lt<U, T>(value: &U, opt: &Optional<T>) -> bool
where
    U: PartialOrd<T> + ?Sized,
{
    opt.as_option().is_some_and(|held| value < held)
}

pub fn value_le<U, T>(value: &U, opt: &Optional<T>) -> bool
where
    U: PartialOrd<T> + ?Sized,
{
    opt.as_option().is_some_and(|held| value <= held)
}

pub fn value_gt<U, T>(value: &U, opt: &Optional<T>) -> bool
where
    U: PartialOrd<T> + ?Sized,
{
    opt.as_option().is_none_or(|held| value > held)
}

pub fn value_ge<U, T>(value: &U, opt: &Optional<T>) -> bool
where
    U: PartialOrd<T> + ?Sized,
{
    opt.as_option().is_none_or(|held| value >= held)
}

/// Operator forms of the plain-value comparisons for `$ty` on either side
macro_rules! impl_value_cmp {
    (@impl [$($gen:tt)*] $ty:ty) => {
        impl<$($gen)* T> PartialEq<$ty> for Optional<T>
        where
            T: PartialEq<$ty>,
        {
            fn eq(&self, other: &$ty) -> bool {
                eq_value(self, other)
            }

            #[allow(clippy::partialeq_ne_impl)]
            fn ne(&self, other: &$ty) -> bool {
                ne_value(self, other)
            }
        }
        impl<$($gen)* T> PartialEq<Optional<T>> for $ty
        where
            $ty: PartialEq<T>,
        {
            fn eq(&self, other: &Optional<T>) -> bool {
                value_eq(self, other)
            }

            #[allow(clippy::partialeq_ne_impl)]
            fn ne(&self, other: &Optional<T>) -> bool {
                value_ne(self, other)
            }
        }
        impl<$($gen)* T> PartialOrd<$ty> for Optional<T>
        where
            T: PartialOrd<$ty>,
        {
            fn partial_cmp(&self, other: &$ty) -> Option<Ordering> {
                match self.as_option() {
                    Some(held) => held.partial_cmp(other),
                    None => Some(Ordering::Less),
                }
            }

            fn lt(&self, other: &$ty) -> bool {
                lt_value(self, other)
            }

            fn le(&self, other: &$ty) -> bool {
                le_value(self, other)
            }

            fn gt(&self, other: &$ty) -> bool {
                gt_value(self, other)
            }

            fn ge(&self, other: &$ty) -> bool {
                ge_value(self, other)
            }
        }
        impl<$($gen)* T> PartialOrd<Optional<T>> for $ty
        where
            $ty: PartialOrd<T>,
        {
            fn partial_cmp(&self, other: &Optional<T>) -> Option<Ordering> {
                match other.as_option() {
                    Some(held) => self.partial_cmp(held),
                    None => Some(Ordering::Greater),
                }
            }

            fn lt(&self, other: &Optional<T>) -> bool {
                value_lt(self, other)
            }

            fn le(&self, other: &Optional<T>) -> bool {
                value_le(self, other)
            }

            fn gt(&self, other: &Optional<T>) -> bool {
                value_gt(self, other)
            }

            fn ge(&self, other: &Optional<T>) -> bool {
                value_ge(self, other)
            }
        }
    };
    (for<$lt:lifetime> $ty:ty) => {
        impl_value_cmp!(@impl [$lt,] $ty);
    };
    ($ty:ty) => {
        impl_value_cmp!(@impl [] $ty);
    };
}

impl_value_cmp!(i8);
impl_value_cmp!(i16);
impl_value_cmp!(i32);
impl_value_cmp!(i64);
impl_value_cmp!(i128);
impl_value_cmp!(isize);
impl_value_cmp!(u8);
impl_value_cmp!(u16);
impl_value_cmp!(u32);
impl_value_cmp!(u64);
impl_value_cmp!(u128);
impl_value_cmp!(usize);
impl_value_cmp!(f32);
impl_value_cmp!(f64);
impl_value_cmp!(bool);
impl_value_cmp!(char);
impl_value_cmp!(str);
impl_value_cmp!(String);
impl_value_cmp!(for<'a> &'a str);

#[cfg(test)]
mod tests {
    use crate::marker::NO_VALUE;

    use super::*;

    #[test]
    fn test_optional_vs_optional() {
        let none: Optional<i32> = Optional::new();
        let one = Optional::some(1_i32);
        let two = Optional::some(2_i32);

        assert!(none < one);
        assert!(!(one < none));
        assert!(none != one);
        assert!(none == Optional::<i32>::new());
        assert!(none <= Optional::<i32>::new());
        assert!(none >= Optional::<i32>::new());
        assert!(one < two);
        assert!(two >= one);
        assert!(one == Optional::some(1_i32));
        assert_eq!(none.cmp(&one), Ordering::Less);
        assert_eq!(two.cmp(&one), Ordering::Greater);
    }

    #[test]
    fn test_cross_type() {
        let a = Optional::some(String::from("x"));
        let b = Optional::some("x");
        assert!(a == b);
        assert!(a != Optional::<&str>::new());
    }

    #[test]
    fn test_partial_order() {
        let nan = Optional::some(f64::NAN);
        let one = Optional::some(1.0_f64);
        assert_eq!(nan.partial_cmp(&one), None);
        assert!(!(nan < one));
        assert!(nan != nan.clone());
        assert!(Optional::<f64>::new() < nan);
    }

    #[test]
    fn test_sort() {
        let mut v = vec![
            Optional::some(3),
            Optional::new(),
            Optional::some(1),
        ];
        v.sort();
        assert_eq!(v, [Optional::new(), Optional::some(1), Optional::some(3)]);
    }

    #[test]
    fn test_no_value() {
        let five = Optional::some(5_i32);
        let none: Optional<i32> = Optional::new();

        assert!(five != NO_VALUE);
        assert!(NO_VALUE < five);
        assert!(!(five < NO_VALUE));
        assert!(five > NO_VALUE);
        assert!(five >= NO_VALUE);
        assert!(!(five <= NO_VALUE));
        assert!(NO_VALUE <= five);
        assert!(!(NO_VALUE > five));
        assert!(!(NO_VALUE >= five));

        assert!(none == NO_VALUE);
        assert!(NO_VALUE == none);
        assert!(!(none < NO_VALUE));
        assert!(!(NO_VALUE < none));
        assert!(none <= NO_VALUE);
        assert!(NO_VALUE <= none);
        assert!(!(none > NO_VALUE));
        assert!(none >= NO_VALUE);
        assert!(NO_VALUE >= none);
    }

    #[test]
    fn test_value_engaged() {
        let five = Optional::some(5_i32);
        assert!(five == 5_i32);
        assert!(five != 6_i32);
        assert!(five < 6_i32);
        assert!(five <= 5_i32);
        assert!(five > 4_i32);
        assert!(five >= 5_i32);
        assert!(5_i32 == five);
        assert!(4_i32 < five);
        assert!(6_i32 > five);
        assert!(!(6_i32 <= five));
    }

    #[test]
    fn test_value_empty() {
        let none: Optional<i32> = Optional::new();
        assert!(!(none == 0_i32));
        assert!(none != 0_i32);
        assert!(none < i32::MIN);
        assert!(none <= i32::MIN);
        assert!(!(none > i32::MIN));
        assert!(!(none >= i32::MIN));

        assert!(!(0_i32 == none));
        assert!(0_i32 != none);
        assert!(!(i32::MIN < none));
        assert!(!(i32::MIN <= none));
        assert!(i32::MIN > none);
        assert!(i32::MIN >= none);
    }

    #[test]
    fn test_value_text() {
        let hello = Optional::some(String::from("hello"));
        assert!(hello == "hello");
        assert!("hello" == hello);
        assert!(hello == *"hello");
        assert!(hello < String::from("world"));
        assert!(Optional::<String>::new() != "hello");
    }

    #[test]
    fn test_value_fns() {
        let some = Optional::some(vec![1_u8]);
        let none: Optional<Vec<u8>> = Optional::new();
        let value: &[u8] = &[1];

        assert!(eq_value(&some, value));
        assert!(!eq_value(&none, value));
        assert!(ne_value(&none, value));
        assert!(value_eq(&vec![1_u8], &some));
        assert!(lt_value(&none, &vec![]));
        assert!(le_value(&some, &vec![1_u8]));
        assert!(gt_value(&some, &vec![]));
        assert!(!ge_value(&none, &vec![]));
        assert!(!value_lt(&vec![], &none));
        assert!(!value_le(&vec![], &none));
        assert!(value_gt(&vec![], &none));
        assert!(value_ge(&vec![1_u8], &some));
        assert!(!value_ne(&vec![1_u8], &some));
    }
}

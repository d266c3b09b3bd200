use core::{
    fmt,
    hash::{Hash, Hasher},
    mem::MaybeUninit,
};

use tap::Pipe;

use crate::{
    error::BadOptionalAccess,
    marker::{IN_PLACE, InPlace, NoValue},
};

/// Zero or one `T` kept in inline storage
///
/// `slot` holds a live `T` iff `engaged` is set.
pub struct Optional<T> {
    engaged: bool,
    slot: MaybeUninit<T>,
}

impl<T> Optional<T> {
    pub const fn new() -> Self {
        Self {
            engaged: false,
            slot: MaybeUninit::uninit(),
        }
    }

    pub const fn none() -> Self {
        Self::new()
    }

    pub const fn no_value(_: NoValue) -> Self {
        Self::new()
    }

    pub const fn some(value: T) -> Self {
        Self {
            engaged: true,
            slot: MaybeUninit::new(value),
        }
    }

    /// Construct the value with `make` straight into the slot.
    ///
    /// A panic in `make` unwinds without ever producing an engaged container.
    pub fn in_place<F>(_: InPlace, make: F) -> Self
    where
        F: FnOnce() -> T,
    {
        let mut this = Self::new();
        this.emplace_with(make);
        this
    }

    pub fn try_in_place<F, E>(_: InPlace, make: F) -> Result<Self, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let mut this = Self::new();
        this.try_emplace_with(make)?;
        Ok(this)
    }

    pub fn in_place_from_iter<I>(_: InPlace, items: I) -> Self
    where
        I: IntoIterator,
        T: FromIterator<I::Item>,
    {
        let mut this = Self::new();
        this.emplace_from_iter(items);
        this
    }

    /// Move the value of a container of another type in, converting it on the way.
    pub fn convert_from<U>(other: Optional<U>) -> Self
    where
        T: From<U>,
    {
        match other.into_option() {
            Some(value) => value.pipe(T::from).pipe(Self::some),
            None => Self::new(),
        }
    }

    /// Clone the value of a container of another type in, converting it on the way.
    pub fn convert_from_ref<U>(other: &Optional<U>) -> Self
    where
        U: Clone,
        T: From<U>,
    {
        match other.as_option() {
            Some(value) => value.clone().pipe(T::from).pipe(Self::some),
            None => Self::new(),
        }
    }

    pub const fn has_value(&self) -> bool {
        self.engaged
    }

    pub fn as_option(&self) -> Option<&T> {
        if !self.engaged {
            return None;
        }
        // SAFETY: engaged
        Some(unsafe { self.slot.assume_init_ref() })
    }

    pub fn as_option_mut(&mut self) -> Option<&mut T> {
        if !self.engaged {
            return None;
        }
        // SAFETY: engaged
        Some(unsafe { self.slot.assume_init_mut() })
    }

    pub fn into_option(mut self) -> Option<T> {
        self.take()
    }

    /// Move the value out and leave the container empty.
    pub fn take(&mut self) -> Option<T> {
        if !self.engaged {
            return None;
        }
        self.engaged = false;
        // SAFETY: the slot was engaged and is vacant from now on, so it is read exactly once
        Some(unsafe { self.slot.assume_init_read() })
    }

    pub fn value(&self) -> Result<&T, BadOptionalAccess> {
        self.as_option().ok_or_else(bad_access::<T>)
    }

    pub fn value_mut(&mut self) -> Result<&mut T, BadOptionalAccess> {
        self.as_option_mut().ok_or_else(bad_access::<T>)
    }

    pub fn into_value(self) -> Result<T, BadOptionalAccess> {
        self.into_option().ok_or_else(bad_access::<T>)
    }

    pub fn value_or(&self, default: T) -> T
    where
        T: Clone,
    {
        match self.as_option() {
            Some(value) => value.clone(),
            None => default,
        }
    }

    pub fn value_or_into<U>(&self, default: U) -> T
    where
        T: Clone + From<U>,
    {
        match self.as_option() {
            Some(value) => value.clone(),
            None => default.pipe(T::from),
        }
    }

    pub fn value_or_else<F>(&self, default: F) -> T
    where
        T: Clone,
        F: FnOnce() -> T,
    {
        match self.as_option() {
            Some(value) => value.clone(),
            None => default(),
        }
    }

    pub fn into_value_or(self, default: T) -> T {
        self.into_option().unwrap_or(default)
    }

    /// # Safety
    ///
    /// The container must be engaged.
    pub unsafe fn get_unchecked(&self) -> &T {
        debug_assert!(self.engaged);
        // SAFETY: upheld by the caller
        unsafe { self.slot.assume_init_ref() }
    }

    /// # Safety
    ///
    /// The container must be engaged.
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.engaged);
        // SAFETY: upheld by the caller
        unsafe { self.slot.assume_init_mut() }
    }

    /// # Safety
    ///
    /// The container must be engaged.
    pub unsafe fn into_inner_unchecked(mut self) -> T {
        debug_assert!(self.engaged);
        self.engaged = false;
        // SAFETY: upheld by the caller; the flag is down so `Drop` leaves the slot alone
        unsafe { self.slot.assume_init_read() }
    }

    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.into_option() {
            Some(value) => Optional::some(f(value)),
            None => Optional::new(),
        }
    }

    /// Drop the held value, if any.
    pub fn reset(&mut self) {
        if !self.engaged {
            return;
        }
        // The flag goes down first: a destructor that unwinds must leave the slot vacant.
        self.engaged = false;
        // SAFETY: the slot was engaged
        unsafe { self.slot.assume_init_drop() };
    }

    /// Drop the held value, if any, then move `value` in.
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.emplace_with(|| value)
    }

    /// Drop the held value, if any, then construct a new one with `make`.
    ///
    /// If `make` panics the container is left empty.
    pub fn emplace_with<F>(&mut self, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.reset();
        let value = self.slot.write(make());
        self.engaged = true;
        value
    }

    /// On `Err` the container is left empty and the error is handed back untouched.
    pub fn try_emplace_with<F, E>(&mut self, make: F) -> Result<&mut T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.reset();
        let value = self.slot.write(make()?);
        self.engaged = true;
        Ok(value)
    }

    pub fn emplace_from_iter<I>(&mut self, items: I) -> &mut T
    where
        I: IntoIterator,
        T: FromIterator<I::Item>,
    {
        self.emplace_with(|| items.into_iter().collect())
    }

    pub fn assign_no_value(&mut self, _: NoValue) -> &mut Self {
        self.reset();
        self
    }

    /// Replace the contents with the contents of `other`, converting the value if there is one.
    pub fn assign_from<U>(&mut self, other: Optional<U>) -> &mut Self
    where
        T: From<U>,
    {
        self.reset();
        if let Some(value) = other.into_option() {
            self.emplace_with(|| T::from(value));
        }
        self
    }

    /// Replace the contents with a clone of the contents of `other`, converting the value if there is one.
    pub fn assign_clone<U>(&mut self, other: &Optional<U>) -> &mut Self
    where
        U: Clone,
        T: From<U>,
    {
        self.reset();
        if let Some(value) = other.as_option() {
            self.emplace_with(|| T::from(value.clone()));
        }
        self
    }

    /// Assign over the held value if there is one; otherwise construct it in the slot.
    pub fn assign_value(&mut self, value: T) -> &mut Self {
        if self.engaged {
            // SAFETY: engaged
            let held = unsafe { self.slot.assume_init_mut() };
            *held = value;
        } else {
            self.emplace(value);
        }
        self
    }

    pub fn assign_value_from<U>(&mut self, value: U) -> &mut Self
    where
        T: From<U>,
    {
        self.assign_value(T::from(value))
    }

    pub fn swap(&mut self, other: &mut Self) {
        match (self.engaged, other.engaged) {
            (true, true) => {
                // SAFETY: both engaged
                let (a, b) = unsafe { (self.slot.assume_init_mut(), other.slot.assume_init_mut()) };
                core::mem::swap(a, b);
            }
            (true, false) => Self::relocate(self, other),
            (false, true) => Self::relocate(other, self),
            (false, false) => (),
        }
    }

    /// Move the value of the engaged `from` into the vacant `to`.
    fn relocate(from: &mut Self, to: &mut Self) {
        debug_assert!(from.engaged);
        debug_assert!(!to.engaged);
        from.engaged = false;
        // SAFETY: `from` was engaged and its slot is vacant from now on
        let value = unsafe { from.slot.assume_init_read() };
        to.slot.write(value);
        to.engaged = true;
    }
}

fn bad_access<T>() -> BadOptionalAccess {
    log::trace!(
        "checked access on an empty `Optional<{}>`",
        core::any::type_name::<T>()
    );
    BadOptionalAccess
}

impl<T> Drop for Optional<T> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Optional<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        match self.as_option() {
            Some(value) => Self::some(value.clone()),
            None => Self::new(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign_clone(source);
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Self::some(value)
    }
}
impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::some(value),
            None => Self::new(),
        }
    }
}
impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<T> fmt::Debug for Optional<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_option() {
            Some(value) => f.debug_tuple("Some").field(value).finish(),
            None => f.write_str("None"),
        }
    }
}

impl<T> Hash for Optional<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.engaged.hash(state);
        if let Some(value) = self.as_option() {
            value.hash(state);
        }
    }
}

pub fn swap<T>(a: &mut Optional<T>, b: &mut Optional<T>) {
    a.swap(b);
}

/// Build an engaged container, deducing `T` from `value`.
pub fn make_optional<T>(value: T) -> Optional<T> {
    Optional::some(value)
}

pub fn make_optional_with<T, F>(make: F) -> Optional<T>
where
    F: FnOnce() -> T,
{
    Optional::in_place(IN_PLACE, make)
}

pub fn make_optional_from_iter<T, I>(items: I) -> Optional<T>
where
    I: IntoIterator,
    T: FromIterator<I::Item>,
{
    Optional::in_place_from_iter(IN_PLACE, items)
}

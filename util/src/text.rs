use std::cmp::Ordering;

pub trait StrExt {
    /// Order strings for display, ignoring case first and falling back to
    /// plain ordinal order so that the result is total.
    ///
    /// ```
    /// # use util::StrExt;
    /// # use std::cmp::Ordering;
    /// assert_eq!("apple".caseless_cmp("Banana"), Ordering::Less);
    /// assert_eq!("Apple".caseless_cmp("apple"), Ordering::Less);
    /// assert_eq!("chest".caseless_cmp("chest"), Ordering::Equal);
    /// ```
    fn caseless_cmp(&self, other: &str) -> Ordering;

    /// Is this string `base` followed by a nonempty run of ASCII digits.
    ///
    /// ```
    /// # use util::StrExt;
    /// assert!("Mine12".is_numbered_variant_of("Mine"));
    /// assert!(!"Mine".is_numbered_variant_of("Mine"));
    /// assert!(!"MineShaft".is_numbered_variant_of("Mine"));
    /// ```
    fn is_numbered_variant_of(&self, base: &str) -> bool;
}

impl StrExt for str {
    fn caseless_cmp(&self, other: &str) -> Ordering {
        let a = self.chars().flat_map(char::to_lowercase);
        let b = other.chars().flat_map(char::to_lowercase);
        a.cmp(b).then_with(|| self.cmp(other))
    }

    fn is_numbered_variant_of(&self, base: &str) -> bool {
        match self.strip_prefix(base) {
            Some(suffix) => {
                !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit())
            }
            None => false,
        }
    }
}

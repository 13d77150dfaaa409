//! Raw option values.

/// A raw, host-supplied option value.
///
/// `text` is the default extraction path used for searching and for the
/// create-entry existence check. Types with named fields can expose them to
/// `key` configuration through [`field`](Self::field), and types that can be
/// built from typed text opt into create-on-type through
/// [`from_input`](Self::from_input).
pub trait SelectItem: Clone {
    /// Searchable text of the whole value.
    fn text(&self) -> String;

    /// Text of the named field, if the value has one.
    fn field(&self, _key: &str) -> Option<String> {
        None
    }

    /// Build a new value from trimmed input text.
    ///
    /// With a `key`, the value should carry the text under that field.
    /// Returns `None` when the type cannot be synthesised.
    fn from_input(_key: Option<&str>, _input: &str) -> Option<Self> {
        None
    }
}

impl SelectItem for String {
    fn text(&self) -> String {
        self.clone()
    }

    fn from_input(key: Option<&str>, input: &str) -> Option<Self> {
        key.is_none().then(|| input.to_owned())
    }
}

impl SelectItem for &'static str {
    fn text(&self) -> String {
        (*self).to_owned()
    }
}

impl SelectItem for char {
    fn text(&self) -> String {
        self.to_string()
    }

    fn from_input(key: Option<&str>, input: &str) -> Option<Self> {
        let mut chars = input.chars();
        match (key, chars.next(), chars.next()) {
            (None, Some(c), None) => Some(c),
            _ => None,
        }
    }
}

macro_rules! impl_select_item_for_numbers {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SelectItem for $ty {
                fn text(&self) -> String {
                    self.to_string()
                }

                fn from_input(key: Option<&str>, input: &str) -> Option<Self> {
                    if key.is_some() {
                        return None;
                    }
                    input.parse().ok()
                }
            }
        )*
    };
}

impl_select_item_for_numbers!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

#[cfg(feature = "json")]
impl SelectItem for serde_json::Value {
    fn text(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            Self::Null => String::new(),
            other => other.to_string(),
        }
    }

    fn field(&self, key: &str) -> Option<String> {
        self.get(key).map(SelectItem::text)
    }

    fn from_input(key: Option<&str>, input: &str) -> Option<Self> {
        let text = Self::String(input.to_owned());
        Some(match key {
            Some(key) => {
                let mut record = serde_json::Map::new();
                record.insert(key.to_owned(), text);
                Self::Object(record)
            }
            None => text,
        })
    }
}

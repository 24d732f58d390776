use std::fmt;

/// Ordered `key=value` pairs exchanged with the gateway.
///
/// Insertion order is significant when signing outbound requests, so this is
/// an association list rather than a map. Use [`FieldList::sorted`] for the
/// key-ordered view that inbound verification works on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldList(Vec<(String, String)>);

/// Key-sorted borrowed view over a [`FieldList`].
#[derive(Debug)]
pub struct SortedFields<'a>(Vec<(&'a str, &'a str)>);

#[derive(Debug)]
pub enum DecodeError {
    NotUtf8,
    InvalidEncoding(String),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotUtf8 => write!(f, "body is not valid UTF-8"),
            Self::InvalidEncoding(part) => write!(f, "invalid percent-encoding in {:?}", part),
        }
    }
}

impl FieldList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Sets `key` to `value`. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();

        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Like [`FieldList::get`], treating an empty value as absent.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn sorted(&self) -> SortedFields<'_> {
        let mut pairs = self.iter().collect::<Vec<_>>();
        pairs.sort_by(|(a, _), (b, _)| a.cmp(b));
        SortedFields(pairs)
    }

    /// Decodes an `application/x-www-form-urlencoded` body.
    ///
    /// `+` decodes to a space, pairs with an empty key are skipped and a
    /// repeated key keeps its last value.
    pub fn from_form(body: &[u8]) -> Result<Self, DecodeError> {
        let body = std::str::from_utf8(body).map_err(|_| DecodeError::NotUtf8)?;
        let mut fields = Self::new();

        for pair in body.split('&').filter(|pair| !pair.is_empty()) {
            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(raw_key)?;
            if key.is_empty() {
                continue;
            }
            fields.insert(key, decode_component(raw_value)?);
        }

        Ok(fields)
    }
}

fn decode_component(raw: &str) -> Result<String, DecodeError> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|_| DecodeError::InvalidEncoding(raw.to_string()))
}

impl<'a> SortedFields<'a> {
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.0.iter().copied()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for FieldList {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Self::new();
        for (key, value) in iter {
            fields.insert(key, value);
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_in_place() {
        let fields = FieldList::new()
            .with("b", "1")
            .with("a", "2")
            .with("b", "3");

        assert_eq!(fields.iter().collect::<Vec<_>>(), vec![("b", "3"), ("a", "2")]);
    }

    #[test]
    fn numbers_are_stringified() {
        let fields = FieldList::new().with("quantity", 3).with("ratio", 1.5);

        assert_eq!(fields.get("quantity"), Some("3"));
        assert_eq!(fields.get("ratio"), Some("1.5"));
    }

    #[test]
    fn sorted_view_orders_by_code_point() {
        let fields = FieldList::new()
            .with("merchant_id", "1")
            .with("m_payment_id", "2")
            .with("Zeta", "3")
            .with("amount", "4");

        let keys = fields.sorted().iter().map(|(k, _)| k).collect::<Vec<_>>();

        assert_eq!(keys, vec!["Zeta", "amount", "m_payment_id", "merchant_id"]);
    }

    #[test]
    fn decodes_form_body() {
        let fields = FieldList::from_form(
            b"payment_status=COMPLETE&email_address=aisha%40example.com&item_name=Al-Ameen+Cap",
        )
        .unwrap();

        assert_eq!(fields.get("payment_status"), Some("COMPLETE"));
        assert_eq!(fields.get("email_address"), Some("aisha@example.com"));
        assert_eq!(fields.get("item_name"), Some("Al-Ameen Cap"));
    }

    #[test]
    fn decodes_empty_and_odd_pairs() {
        assert!(FieldList::from_form(b"").unwrap().is_empty());

        let fields = FieldList::from_form(b"&flag&=orphan&name_last=&a=1&a=2").unwrap();

        assert_eq!(fields.get("flag"), Some(""));
        assert_eq!(fields.get("name_last"), Some(""));
        assert_eq!(fields.get_non_empty("name_last"), None);
        assert_eq!(fields.get("a"), Some("2"));
        assert_eq!(fields.len(), 3);
    }

    #[test]
    fn rejects_non_utf8_body() {
        assert!(matches!(
            FieldList::from_form(&[0x61, 0x3d, 0xff, 0xfe]),
            Err(DecodeError::NotUtf8)
        ));
    }
}

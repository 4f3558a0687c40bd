use std::fmt;

/// Owned JSON pointer (RFC 6901) built one reference token at a time.
///
/// The root pointer is the empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PointerBuf(String);

impl PointerBuf {
    /// Pointer to the whole document.
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Append an object member name, escaping `~` and `/`.
    pub fn push(&mut self, token: &str) {
        self.0.push('/');
        for c in token.chars() {
            match c {
                '~' => self.0.push_str("~0"),
                '/' => self.0.push_str("~1"),
                c => self.0.push(c),
            }
        }
    }

    /// Append an array index.
    pub fn push_index(&mut self, index: usize) {
        self.0.push('/');
        self.0.push_str(&index.to_string());
    }

    /// Copy of this pointer extended by one member name.
    pub fn with(&self, token: &str) -> Self {
        let mut next = self.clone();
        next.push(token);
        next
    }

    /// Copy of this pointer extended by one array index.
    pub fn with_index(&self, index: usize) -> Self {
        let mut next = self.clone();
        next.push_index(index);
        next
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PointerBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PointerBuf> for String {
    fn from(p: PointerBuf) -> Self {
        p.0
    }
}

#[cfg(test)]
mod tests {
    use super::PointerBuf;

    #[test]
    fn root_is_empty() {
        assert_eq!(PointerBuf::root().as_str(), "");
    }

    #[test]
    fn escapes_reserved_characters() {
        let p = PointerBuf::root().with("spec").with("nodeSelector").with("cicd.devel/team");
        assert_eq!(p.as_str(), "/spec/nodeSelector/cicd.devel~1team");

        let p = PointerBuf::root().with("a~b");
        assert_eq!(p.as_str(), "/a~0b");
    }

    #[test]
    fn indexes_are_plain_numbers() {
        let p = PointerBuf::root().with("containers").with_index(2);
        assert_eq!(p.to_string(), "/containers/2");
    }
}

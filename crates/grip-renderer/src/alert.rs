//! Alert kinds recognized from a `[!KIND]` token at the start of a block quote.

/// Callout style of a block quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Note,
    Tip,
    Important,
    Warning,
    Caution,
    BlockQuote,
}

impl AlertKind {
    /// All kinds, in matching order.
    pub const ALL: [Self; 6] = [
        Self::Note,
        Self::Tip,
        Self::Important,
        Self::Warning,
        Self::Caution,
        Self::BlockQuote,
    ];

    /// Closing markup written when the alert paragraph ends.
    pub const CLOSING: &'static str = "</p></div>";

    /// Parse an alert token at the start of `text`.
    ///
    /// The token is `[!KIND]` with KIND written in upper case, as returned
    /// by [`keyword`](Self::keyword). Returns the kind and the text following the token.
    ///
    /// ```
    /// use grip_renderer::AlertKind;
    ///
    /// assert_eq!(
    ///     AlertKind::parse_prefix("[!WARNING] Careful"),
    ///     Some((AlertKind::Warning, " Careful"))
    /// );
    /// assert_eq!(AlertKind::parse_prefix("[!warning]"), None);
    /// ```
    #[must_use]
    pub fn parse_prefix(text: &str) -> Option<(Self, &str)> {
        let rest = text.strip_prefix("[!")?;
        let end = rest.find(']')?;
        let token = &rest[..end];
        let kind = Self::ALL
            .into_iter()
            .find(|kind| kind.keyword() == token)?;
        Some((kind, &rest[end + 1..]))
    }

    /// Upper-case keyword as written inside the token.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Note => "NOTE",
            Self::Tip => "TIP",
            Self::Important => "IMPORTANT",
            Self::Warning => "WARNING",
            Self::Caution => "CAUTION",
            Self::BlockQuote => "BLOCKQUOTE",
        }
    }

    /// Lower-case name, used for template lookup and CSS classes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Tip => "tip",
            Self::Important => "important",
            Self::Warning => "warning",
            Self::Caution => "caution",
            Self::BlockQuote => "blockquote",
        }
    }

    /// Human-readable title shown in the alert header.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Note => "Note",
            Self::Tip => "Tip",
            Self::Important => "Important",
            Self::Warning => "Warning",
            Self::Caution => "Caution",
            Self::BlockQuote => "Quote",
        }
    }

    /// Name of the fragment template rendering the opening markup.
    #[must_use]
    pub fn template_name(self) -> String {
        format!("alert/{}.html", self.as_str())
    }
}

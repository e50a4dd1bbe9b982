// The document model: one unit of text plus who wrote it.

/// Who authored a document: one of the two figures, or a follower of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthorRole {
    Trump,
    Bernie,
    TrumpFollower,
    BernieFollower,
}

impl AuthorRole {
    /// Parse the `author_status` field of a labeled tweet record.
    /// Any other value means the record is dropped (with a visible count).
    pub fn from_status(status: &str) -> Option<AuthorRole> {
        match status {
            "Trump" => Some(AuthorRole::Trump),
            "Bernie" => Some(AuthorRole::Bernie),
            "Trump follower" => Some(AuthorRole::TrumpFollower),
            "Bernie follower" => Some(AuthorRole::BernieFollower),
            _ => None,
        }
    }

    /// The four-way label encoding: Trump=0, Bernie=1, Trump follower=2,
    /// Bernie follower=3.
    pub fn label(self) -> u8 {
        match self {
            AuthorRole::Trump => 0,
            AuthorRole::Bernie => 1,
            AuthorRole::TrumpFollower => 2,
            AuthorRole::BernieFollower => 3,
        }
    }

    /// Collapse to the binary Trump-side=0 / Bernie-side=1 label used by
    /// the classifier and its follower transfer evaluation.
    pub fn binary_label(self) -> u8 {
        match self {
            AuthorRole::Trump | AuthorRole::TrumpFollower => 0,
            AuthorRole::Bernie | AuthorRole::BernieFollower => 1,
        }
    }

    /// Whether this is one of the two figures themselves (classifier
    /// training material) rather than a follower (held-out transfer set).
    pub fn is_primary(self) -> bool {
        matches!(self, AuthorRole::Trump | AuthorRole::Bernie)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AuthorRole::Trump => "Trump",
            AuthorRole::Bernie => "Bernie",
            AuthorRole::TrumpFollower => "Trump follower",
            AuthorRole::BernieFollower => "Bernie follower",
        }
    }
}

/// One unit of text (a tweet or a press release) with its author role.
#[derive(Debug, Clone)]
pub struct Document {
    pub text: String,
    pub role: AuthorRole,
}

/// Split documents into (primary, follower) sets. Only primary documents
/// ever reach classifier training; followers are evaluated against the
/// model afterwards, never trained on.
pub fn partition_by_role(documents: Vec<Document>) -> (Vec<Document>, Vec<Document>) {
    documents.into_iter().partition(|d| d.role.is_primary())
}

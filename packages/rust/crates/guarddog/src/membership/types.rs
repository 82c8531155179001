/// A party's standing in a chat, as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberStatus {
    NotMember,
    Member,
    Owner,
    Administrator,
    Restricted,
    Banned,
    Pending,
}

impl MemberStatus {
    pub const ALL: [Self; 7] = [
        Self::NotMember,
        Self::Member,
        Self::Owner,
        Self::Administrator,
        Self::Restricted,
        Self::Banned,
        Self::Pending,
    ];

    /// Map a Bot API `ChatMember.status` string.
    pub fn from_telegram(raw: &str) -> Option<Self> {
        match raw.trim() {
            "left" => Some(Self::NotMember),
            "member" => Some(Self::Member),
            "creator" => Some(Self::Owner),
            "administrator" => Some(Self::Administrator),
            "restricted" => Some(Self::Restricted),
            "kicked" => Some(Self::Banned),
            "pending" => Some(Self::Pending),
            _ => None,
        }
    }

    pub fn as_telegram_str(self) -> &'static str {
        match self {
            Self::NotMember => "left",
            Self::Member => "member",
            Self::Owner => "creator",
            Self::Administrator => "administrator",
            Self::Restricted => "restricted",
            Self::Banned => "kicked",
            Self::Pending => "pending",
        }
    }
}

/// One party's membership in one chat at one instant.
///
/// `is_member` is only meaningful for [`MemberStatus::Restricted`]; an absent
/// flag counts as not a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MembershipSnapshot {
    pub status: MemberStatus,
    pub is_member: Option<bool>,
}

impl MembershipSnapshot {
    pub const fn new(status: MemberStatus) -> Self {
        Self {
            status,
            is_member: None,
        }
    }

    pub const fn restricted(is_member: bool) -> Self {
        Self {
            status: MemberStatus::Restricted,
            is_member: Some(is_member),
        }
    }

    /// Whether this snapshot places the party inside the chat.
    pub fn is_member(&self) -> bool {
        match self.status {
            MemberStatus::Member | MemberStatus::Owner | MemberStatus::Administrator => true,
            MemberStatus::Restricted => self.is_member == Some(true),
            MemberStatus::NotMember | MemberStatus::Banned | MemberStatus::Pending => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChatKind {
    Private,
    Group,
    Supergroup,
    Channel,
}

impl ChatKind {
    pub fn from_telegram(raw: &str) -> Option<Self> {
        match raw.trim() {
            "private" => Some(Self::Private),
            "group" => Some(Self::Group),
            "supergroup" => Some(Self::Supergroup),
            "channel" => Some(Self::Channel),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChatRef {
    pub id: i64,
    pub kind: ChatKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRef {
    pub id: i64,
    /// `@username` when the user has one, otherwise the full name.
    pub display_name: String,
    pub is_premium: bool,
}

/// A single observed membership transition for a (chat, user) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipUpdateEvent {
    pub chat: ChatRef,
    pub user: UserRef,
    pub old: MembershipSnapshot,
    pub new: MembershipSnapshot,
}

impl MembershipUpdateEvent {
    pub fn chat_id(&self) -> String {
        self.chat.id.to_string()
    }
}

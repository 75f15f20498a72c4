//! # Parameter Types
//!
//! Every parameter name this crate knows a grammar for is listed here as a
//! [`ParamType`]. Anything else is kept as an
//! [`ExtensionParameter`](crate::types::extension::ExtensionParameter).
//!
//! Names are matched case-insensitively and always encoded in their canonical
//! lowercase form.
//!
//! ```rust
//! use rvoip_sip_params::types::param_type::{ParamType, Grammar};
//!
//! assert_eq!(ParamType::from_name(b"TAG"), ParamType::Tag);
//! assert_eq!(ParamType::Tag.name(), "tag");
//! assert_eq!(ParamType::Ttl.grammar(), Grammar::UInt);
//! assert_eq!(ParamType::from_name(b"x-custom"), ParamType::Unknown);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// The value grammar a known parameter is decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grammar {
    /// Presence only, e.g. `lr`
    Exists,
    /// Token or quoted string; quoting is remembered
    Data,
    /// Always written as a quoted string, e.g. `realm="atlanta.com"`
    QuotedData,
    /// Unsigned decimal, e.g. `expires=3600`
    UInt,
    /// Quality value in `0..=1` with up to three decimals
    QValue,
    /// `rport` flag with an optional port
    Rport,
    /// Comma-separated options, usually quoted, e.g. `methods="INVITE,BYE"`
    List,
}

impl Grammar {
    /// Short label used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Grammar::Exists => "flag",
            Grammar::Data | Grammar::QuotedData => "data",
            Grammar::UInt => "integer",
            Grammar::QValue => "qvalue",
            Grammar::Rport => "rport",
            Grammar::List => "list",
        }
    }
}

/// Tag identifying a registered parameter.
///
/// `Qop` and `QopOptions` share the wire name `qop`: a credential carries the
/// chosen token (`qop=auth`) while a challenge carries the quoted option set
/// (`qop="auth,auth-int"`). The decoder picks the variant from the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ParamType {
    // flags
    Lr,
    Ob,
    IsFocus,

    Rport,

    // token or quoted
    Transport,
    User,
    Method,
    Maddr,
    Tag,
    ToTag,
    FromTag,
    Branch,
    Received,
    Comp,
    Handling,
    Purpose,
    Algorithm,
    Id,
    Reason,
    SmimeType,
    Micalg,
    Charset,
    Boundary,
    Protocol,
    SigcompId,
    Gr,
    Refresher,
    Stale,
    Nc,
    AppId,
    ProfileType,
    Vendor,
    Model,
    Version,
    Mode,
    Text,
    Qop,

    // always quoted
    Realm,
    Nonce,
    Opaque,
    Cnonce,
    Username,
    Uri,
    Response,
    Domain,
    NextNonce,
    Rspauth,
    Instance,
    Url,

    // numeric
    Ttl,
    Expires,
    Duration,
    RetryAfter,
    RegId,
    Cause,
    Q,

    // option lists
    Methods,
    Events,
    QopOptions,

    /// Sentinel returned for names that are not registered. Never stored.
    Unknown,
}

/// A set of parameter types, used by
/// [`ParserCategory::remove_params_except`](crate::types::category::ParserCategory::remove_params_except).
pub type ParamTypeSet = HashSet<ParamType>;

impl ParamType {
    /// Resolves a wire name, ignoring ASCII case.
    ///
    /// Returns [`ParamType::Unknown`] for unregistered names. `qop` resolves
    /// to [`ParamType::Qop`]; the decoder may still produce `QopOptions`.
    pub fn from_name(name: &[u8]) -> ParamType {
        let lower = String::from_utf8_lossy(name).to_ascii_lowercase();
        match lower.as_str() {
            "lr" => ParamType::Lr,
            "ob" => ParamType::Ob,
            "isfocus" => ParamType::IsFocus,
            "rport" => ParamType::Rport,
            "transport" => ParamType::Transport,
            "user" => ParamType::User,
            "method" => ParamType::Method,
            "maddr" => ParamType::Maddr,
            "tag" => ParamType::Tag,
            "to-tag" => ParamType::ToTag,
            "from-tag" => ParamType::FromTag,
            "branch" => ParamType::Branch,
            "received" => ParamType::Received,
            "comp" => ParamType::Comp,
            "handling" => ParamType::Handling,
            "purpose" => ParamType::Purpose,
            "algorithm" => ParamType::Algorithm,
            "id" => ParamType::Id,
            "reason" => ParamType::Reason,
            "smime-type" => ParamType::SmimeType,
            "micalg" => ParamType::Micalg,
            "charset" => ParamType::Charset,
            "boundary" => ParamType::Boundary,
            "protocol" => ParamType::Protocol,
            "sigcomp-id" => ParamType::SigcompId,
            "gr" => ParamType::Gr,
            "refresher" => ParamType::Refresher,
            "stale" => ParamType::Stale,
            "nc" => ParamType::Nc,
            "app-id" => ParamType::AppId,
            "profile-type" => ParamType::ProfileType,
            "vendor" => ParamType::Vendor,
            "model" => ParamType::Model,
            "version" => ParamType::Version,
            "mode" => ParamType::Mode,
            "text" => ParamType::Text,
            "qop" => ParamType::Qop,
            "realm" => ParamType::Realm,
            "nonce" => ParamType::Nonce,
            "opaque" => ParamType::Opaque,
            "cnonce" => ParamType::Cnonce,
            "username" => ParamType::Username,
            "uri" => ParamType::Uri,
            "response" => ParamType::Response,
            "domain" => ParamType::Domain,
            "nextnonce" => ParamType::NextNonce,
            "rspauth" => ParamType::Rspauth,
            "+sip.instance" => ParamType::Instance,
            "url" => ParamType::Url,
            "ttl" => ParamType::Ttl,
            "expires" => ParamType::Expires,
            "duration" => ParamType::Duration,
            "retry-after" => ParamType::RetryAfter,
            "reg-id" => ParamType::RegId,
            "cause" => ParamType::Cause,
            "q" => ParamType::Q,
            "methods" => ParamType::Methods,
            "events" => ParamType::Events,
            _ => ParamType::Unknown,
        }
    }

    /// Canonical wire name.
    pub fn name(&self) -> &'static str {
        match self {
            ParamType::Lr => "lr",
            ParamType::Ob => "ob",
            ParamType::IsFocus => "isfocus",
            ParamType::Rport => "rport",
            ParamType::Transport => "transport",
            ParamType::User => "user",
            ParamType::Method => "method",
            ParamType::Maddr => "maddr",
            ParamType::Tag => "tag",
            ParamType::ToTag => "to-tag",
            ParamType::FromTag => "from-tag",
            ParamType::Branch => "branch",
            ParamType::Received => "received",
            ParamType::Comp => "comp",
            ParamType::Handling => "handling",
            ParamType::Purpose => "purpose",
            ParamType::Algorithm => "algorithm",
            ParamType::Id => "id",
            ParamType::Reason => "reason",
            ParamType::SmimeType => "smime-type",
            ParamType::Micalg => "micalg",
            ParamType::Charset => "charset",
            ParamType::Boundary => "boundary",
            ParamType::Protocol => "protocol",
            ParamType::SigcompId => "sigcomp-id",
            ParamType::Gr => "gr",
            ParamType::Refresher => "refresher",
            ParamType::Stale => "stale",
            ParamType::Nc => "nc",
            ParamType::AppId => "app-id",
            ParamType::ProfileType => "profile-type",
            ParamType::Vendor => "vendor",
            ParamType::Model => "model",
            ParamType::Version => "version",
            ParamType::Mode => "mode",
            ParamType::Text => "text",
            ParamType::Qop | ParamType::QopOptions => "qop",
            ParamType::Realm => "realm",
            ParamType::Nonce => "nonce",
            ParamType::Opaque => "opaque",
            ParamType::Cnonce => "cnonce",
            ParamType::Username => "username",
            ParamType::Uri => "uri",
            ParamType::Response => "response",
            ParamType::Domain => "domain",
            ParamType::NextNonce => "nextnonce",
            ParamType::Rspauth => "rspauth",
            ParamType::Instance => "+sip.instance",
            ParamType::Url => "url",
            ParamType::Ttl => "ttl",
            ParamType::Expires => "expires",
            ParamType::Duration => "duration",
            ParamType::RetryAfter => "retry-after",
            ParamType::RegId => "reg-id",
            ParamType::Cause => "cause",
            ParamType::Q => "q",
            ParamType::Methods => "methods",
            ParamType::Events => "events",
            ParamType::Unknown => "unknown",
        }
    }

    /// Grammar the value is decoded and encoded with.
    pub fn grammar(&self) -> Grammar {
        match self {
            ParamType::Lr | ParamType::Ob | ParamType::IsFocus | ParamType::Unknown => Grammar::Exists,
            ParamType::Rport => Grammar::Rport,
            ParamType::Realm
            | ParamType::Nonce
            | ParamType::Opaque
            | ParamType::Cnonce
            | ParamType::Username
            | ParamType::Uri
            | ParamType::Response
            | ParamType::Domain
            | ParamType::NextNonce
            | ParamType::Rspauth
            | ParamType::Instance
            | ParamType::Url => Grammar::QuotedData,
            ParamType::Ttl
            | ParamType::Expires
            | ParamType::Duration
            | ParamType::RetryAfter
            | ParamType::RegId
            | ParamType::Cause => Grammar::UInt,
            ParamType::Q => Grammar::QValue,
            ParamType::Methods | ParamType::Events | ParamType::QopOptions => Grammar::List,
            _ => Grammar::Data,
        }
    }

    /// True for every tag except the [`ParamType::Unknown`] sentinel.
    pub fn is_known(&self) -> bool {
        *self != ParamType::Unknown
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};

/// Names of the SIP headers whose values carry a parameter list
///
/// A [`ParserCategory`](crate::types::category::ParserCategory) remembers the
/// header it was cut from so that errors and log events can say where a
/// parameter was missing. Headers without parameters are represented by
/// `Other`, as is any extension header.
///
/// Header names are case-insensitive in SIP. Parsing accepts any casing and
/// the compact forms; `as_str` returns the canonical capitalization.
///
/// # Examples
///
/// ```rust
/// use rvoip_sip_params::types::headers::HeaderName;
/// use std::str::FromStr;
///
/// assert_eq!(HeaderName::from_str("v").unwrap(), HeaderName::Via);
/// assert_eq!(HeaderName::Via.as_str(), "Via");
///
/// let custom = HeaderName::from_str("X-Custom-Header").unwrap();
/// assert_eq!(custom, HeaderName::Other("X-Custom-Header".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeaderName {
    /// Via: branch, received, rport, maddr, ttl
    Via,
    /// From: tag
    From,
    /// To: tag
    To,
    /// Contact: expires, q, +sip.instance, reg-id
    Contact,
    /// Route: lr
    Route,
    /// Record-Route: lr
    RecordRoute,
    /// Path: lr, ob
    Path,
    /// Content-Type: charset, boundary
    ContentType,
    /// Content-Disposition: handling
    ContentDisposition,
    /// Accept: q
    Accept,
    /// Event: id
    Event,
    /// Subscription-State: expires, reason, retry-after
    SubscriptionState,
    /// Refer-To: method
    ReferTo,
    /// Referred-By: cid
    ReferredBy,
    /// Replaces: to-tag, from-tag
    Replaces,
    /// Retry-After: duration
    RetryAfter,
    /// Session-Expires: refresher
    SessionExpires,
    /// Reason: cause, text
    Reason,
    /// WWW-Authenticate: realm, nonce, qop, ...
    WwwAuthenticate,
    /// Proxy-Authenticate: realm, nonce, qop, ...
    ProxyAuthenticate,
    /// Authorization: username, response, nc, cnonce, ...
    Authorization,
    /// Proxy-Authorization: username, response, nc, cnonce, ...
    ProxyAuthorization,
    /// Authentication-Info: nextnonce, rspauth, qop
    AuthenticationInfo,
    /// Call-Info: purpose
    CallInfo,
    /// Alert-Info
    AlertInfo,
    /// Custom header name
    Other(String),
}

impl HeaderName {
    /// Returns the canonical name of the header
    pub fn as_str(&self) -> &str {
        match self {
            HeaderName::Via => "Via",
            HeaderName::From => "From",
            HeaderName::To => "To",
            HeaderName::Contact => "Contact",
            HeaderName::Route => "Route",
            HeaderName::RecordRoute => "Record-Route",
            HeaderName::Path => "Path",
            HeaderName::ContentType => "Content-Type",
            HeaderName::ContentDisposition => "Content-Disposition",
            HeaderName::Accept => "Accept",
            HeaderName::Event => "Event",
            HeaderName::SubscriptionState => "Subscription-State",
            HeaderName::ReferTo => "Refer-To",
            HeaderName::ReferredBy => "Referred-By",
            HeaderName::Replaces => "Replaces",
            HeaderName::RetryAfter => "Retry-After",
            HeaderName::SessionExpires => "Session-Expires",
            HeaderName::Reason => "Reason",
            HeaderName::WwwAuthenticate => "WWW-Authenticate",
            HeaderName::ProxyAuthenticate => "Proxy-Authenticate",
            HeaderName::Authorization => "Authorization",
            HeaderName::ProxyAuthorization => "Proxy-Authorization",
            HeaderName::AuthenticationInfo => "Authentication-Info",
            HeaderName::CallInfo => "Call-Info",
            HeaderName::AlertInfo => "Alert-Info",
            HeaderName::Other(s) => s,
        }
    }
}

impl fmt::Display for HeaderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HeaderName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::ParseError("Empty header name is not allowed".to_string()));
        }

        let lower_s = s.to_lowercase();
        match lower_s.as_str() {
            "via" | "v" => Ok(HeaderName::Via),
            "from" | "f" => Ok(HeaderName::From),
            "to" | "t" => Ok(HeaderName::To),
            "contact" | "m" => Ok(HeaderName::Contact),
            "route" => Ok(HeaderName::Route),
            "record-route" => Ok(HeaderName::RecordRoute),
            "path" => Ok(HeaderName::Path),
            "content-type" | "c" => Ok(HeaderName::ContentType),
            "content-disposition" | "d" => Ok(HeaderName::ContentDisposition),
            "accept" => Ok(HeaderName::Accept),
            "event" | "o" => Ok(HeaderName::Event),
            "subscription-state" => Ok(HeaderName::SubscriptionState),
            "refer-to" | "r" => Ok(HeaderName::ReferTo),
            "referred-by" | "b" => Ok(HeaderName::ReferredBy),
            "replaces" => Ok(HeaderName::Replaces),
            "retry-after" => Ok(HeaderName::RetryAfter),
            "session-expires" | "x" => Ok(HeaderName::SessionExpires),
            "reason" => Ok(HeaderName::Reason),
            "www-authenticate" => Ok(HeaderName::WwwAuthenticate),
            "proxy-authenticate" => Ok(HeaderName::ProxyAuthenticate),
            "authorization" => Ok(HeaderName::Authorization),
            "proxy-authorization" => Ok(HeaderName::ProxyAuthorization),
            "authentication-info" => Ok(HeaderName::AuthenticationInfo),
            "call-info" => Ok(HeaderName::CallInfo),
            "alert-info" => Ok(HeaderName::AlertInfo),
            _ => Ok(HeaderName::Other(s.to_string())),
        }
    }
}

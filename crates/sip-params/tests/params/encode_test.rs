// Wire encoding tests

use crate::common::*;

use rvoip_sip_params::prelude::*;

#[test]
fn test_msgr_space_before_first_typed_parameter() {
    let cat = start_line(";foo=bar;TAG=abc123;msgr");
    assert_eq!(cat.to_string(), "; tag=abc123;foo=bar;msgr");

    let mut params = String::new();
    cat.encode_params(&mut params).unwrap();
    assert_eq!(params, "; tag=abc123;foo=bar;msgr");
}

#[test]
fn test_msgr_without_typed_parameters() {
    let cat = start_line(";msgr;x-foo=1");
    assert_eq!(cat.to_string(), ";msgr;x-foo=1");
}

#[test]
fn test_via_round_trip() {
    let raw = ";branch=z9hG4bK776asdhds;rport=5060;received=192.0.2.1;ttl=16;maddr=224.2.0.1;x-custom=1";
    let via = header(HeaderName::Via, raw);
    assert_eq!(via.to_string(), raw);
}

#[test]
fn test_registered_names_are_lowercased() {
    let route = header(HeaderName::Route, ";LR;Transport=TCP;X-Keep=Case");
    assert_eq!(route.to_string(), ";lr;transport=TCP;X-Keep=Case");
}

#[test]
fn test_challenge_qop_options() {
    let raw = ";realm=\"atlanta.com\";qop=\"auth,auth-int\";nonce=\"84a4cc6f3082121f32b42a2187831a9e\"";
    let cat = header(HeaderName::WwwAuthenticate, raw);

    let options = cat.param(ParamType::QopOptions).unwrap();
    assert_eq!(
        options.as_list(),
        Some(&["auth".to_string(), "auth-int".to_string()][..])
    );
    assert!(!cat.exists(ParamType::Qop));
    assert_eq!(cat.to_string(), raw);
}

#[test]
fn test_credential_qop_token() {
    let raw = ";qop=auth;nc=00000001;cnonce=\"0a4f113b\"";
    let cat = header(HeaderName::Authorization, raw);
    assert_eq!(cat.param_str(ParamType::Qop).unwrap(), "auth");
    assert!(!cat.exists(ParamType::QopOptions));
    assert_eq!(cat.to_string(), raw);
}

#[test]
fn test_created_qop_options_is_quoted() {
    let mut cat = header(HeaderName::ProxyAuthenticate, "");
    if let Some(items) = cat.param_mut(ParamType::QopOptions).as_list_mut() {
        items.push("auth".into());
    }
    assert_eq!(cat.to_string(), ";qop=\"auth\"");
}

#[test]
fn test_quoted_data_forced_on_output() {
    let cat = start_line(";realm=biloxi.com;nonce=abc");
    assert_eq!(cat.to_string(), ";realm=\"biloxi.com\";nonce=\"abc\"");
}

#[test]
fn test_extension_value_quoting() {
    let cat = start_line(";x-note=\"say \\\"hi\\\"\";x-flag;x-plain=v");
    assert_eq!(cat.to_string(), ";x-note=\"say \\\"hi\\\"\";x-flag;x-plain=v");

    let mut cat = start_line("");
    cat.extension_mut("x-reason").push_str("no route");
    assert_eq!(cat.to_string(), ";x-reason=\"no route\"");
}

#[test]
fn test_qvalue_minimal_form() {
    let cat = header(HeaderName::Contact, ";q=0.500;expires=60");
    assert_eq!(cat.to_string(), ";q=0.5;expires=60");

    let cat = header(HeaderName::Accept, ";q=1.000");
    assert_eq!(cat.to_string(), ";q=1");
}

#[test]
fn test_stops_at_header_boundary() {
    let via = header(HeaderName::Via, ";branch=z9hG4bK1 \r\n");
    assert_eq!(via.to_string(), ";branch=z9hG4bK1");

    let uri_params = start_line(";transport=tcp>;tag=9");
    assert_eq!(uri_params.to_string(), ";transport=tcp");
}

#[test]
fn test_commutative_hash_examples() {
    let a = header(HeaderName::Route, ";tag=1;lr;x=y");
    let b = header(HeaderName::Route, ";x=y;tag=1");
    assert_eq!(a.commutative_param_hash(), b.commutative_param_hash());

    let c = header(HeaderName::Route, ";tag=2;x=y");
    assert_ne!(a.commutative_param_hash(), c.commutative_param_hash());

    let empty = start_line("");
    assert!(empty.commutative_param_hash().as_bytes().is_empty());
}

#[test]
fn test_non_utf8_parameters_are_dropped() {
    let cat: ParserCategory =
        ParserCategory::start_line(&b";x-name=\"caf\xe9\";tag=\xe9t\xe9;lr;x-ok=1"[..]);
    assert!(!cat.exists(ParamType::Tag));
    assert!(!cat.exists_extension("x-name"));
    assert_eq!(cat.to_string(), ";lr;x-ok=1");

    let clean = start_line(";lr;x-ok=1");
    assert_eq!(cat.commutative_param_hash(), clean.commutative_param_hash());
}

#[test]
fn test_utf8_quoted_text_round_trips() {
    let raw = ";realm=\"caf\u{e9}\";x-name=\"caf\u{e9}\"";
    let cat = start_line(raw);
    assert_eq!(cat.param_str(ParamType::Realm).unwrap(), "caf\u{e9}");
    assert_eq!(cat.to_string(), raw);
}

#[test]
fn test_unterminated_quote_written_back_verbatim() {
    let cat = start_line(";realm=\"open;lr");
    assert_eq!(cat.to_string(), ";realm=\"open;lr");
    assert!(cat.exists(ParamType::Lr));
}

#[test]
fn test_mutated_quoted_values_are_escaped() {
    let mut cat = header(HeaderName::WwwAuthenticate, ";realm=\"atlanta.com\";x-note=\"a b\"");
    if let Some(realm) = cat.param_mut(ParamType::Realm).as_string_mut() {
        realm.push_str(" \"east\"");
    }
    cat.extension_mut("x-note").push_str(" \"c\"");
    assert_eq!(
        cat.to_string(),
        ";realm=\"atlanta.com \\\"east\\\"\";x-note=\"a b \\\"c\\\"\""
    );

    let reparsed = start_line(&cat.to_string());
    assert_eq!(reparsed.param_str(ParamType::Realm).unwrap(), "atlanta.com \"east\"");
    assert_eq!(reparsed.extension("x-note").unwrap(), "a b \"c\"");
}

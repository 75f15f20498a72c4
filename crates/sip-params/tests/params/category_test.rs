// Category lifecycle and accessor tests

use crate::common::*;

use rvoip_sip_params::prelude::*;

#[test]
fn test_parse_is_deferred_until_access() {
    let via = header(HeaderName::Via, ";branch=z9hG4bK74bf9;received=192.0.2.1");
    assert!(!via.is_parsed());
    match via.state() {
        ParseState::Unparsed { raw } => {
            assert_eq!(raw.map(|b| b.len()), Some(39));
        }
        ParseState::Parsed { .. } => panic!("parsed before first access"),
    }

    assert_eq!(via.param_str(ParamType::Received).unwrap(), "192.0.2.1");
    assert!(via.is_parsed());
}

#[test]
fn test_ensure_parsed_twice_adds_nothing() {
    let cat = start_line(";tag=1;lr;x-foo=bar");
    cat.ensure_parsed();
    let first = cat.parameters().clone();
    cat.ensure_parsed();
    assert_eq!(cat.parameters(), &first);
    assert_eq!(cat.parameters().len(), 3);
}

#[test]
fn test_missing_strict_read_then_create() {
    init_tracing();
    let mut to = header(HeaderName::To, "");

    let err = to.param(ParamType::Tag).unwrap_err();
    assert_eq!(err.to_string(), "Missing parameter tag (To)");
    assert!(!to.exists(ParamType::Tag));

    if let Some(tag) = to.param_mut(ParamType::Tag).as_string_mut() {
        tag.push_str("8321234356");
    }
    assert!(to.exists(ParamType::Tag));
    assert_eq!(to.param_str(ParamType::Tag).unwrap(), "8321234356");
    assert_eq!(to.to_string(), ";tag=8321234356");
}

#[test]
fn test_missing_extension() {
    init_tracing();
    let cat = start_line(";transport=tcp");
    match cat.extension("x-trace") {
        Err(Error::MissingParameter { name, context }) => {
            assert_eq!(name, "x-trace");
            assert_eq!(context, "Request/Status line");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_typed_reads() {
    let contact = header(HeaderName::Contact, ";expires=3600;q=0.25;+sip.instance=\"<urn:uuid:abc>\"");
    assert_eq!(contact.param_u32(ParamType::Expires).unwrap(), 3600);
    assert_eq!(contact.param_qvalue(ParamType::Q).unwrap(), QValue::new(250).unwrap());
    assert_eq!(contact.param_str(ParamType::Instance).unwrap(), "<urn:uuid:abc>");

    assert!(matches!(
        contact.param_u32(ParamType::Instance),
        Err(Error::ParameterTypeMismatch { expected: "integer", .. })
    ));
}

#[test]
fn test_duplicates_kept_until_mutation() {
    let mut cat = start_line(";tag=a;TAG=b");
    assert_eq!(cat.parameters().count(ParamType::Tag), 2);
    assert_eq!(cat.param_str(ParamType::Tag).unwrap(), "a");

    cat.set_param(Parameter::new(ParamType::Tag, ParamValue::data("c")).unwrap());
    assert_eq!(cat.to_string(), ";tag=b;tag=c");

    cat.remove(ParamType::Tag);
    assert!(!cat.exists(ParamType::Tag));
    assert_eq!(cat.to_string(), "");
}

#[test]
fn test_remove_params_except() {
    let mut route = header(HeaderName::Route, ";lr;transport=udp;maddr=10.0.0.1;x-hint=1");
    let keep: ParamTypeSet = [ParamType::Lr, ParamType::Ttl].into_iter().collect();
    route.remove_params_except(&keep);

    assert!(route.exists(ParamType::Lr));
    assert!(!route.exists(ParamType::Ttl));
    assert!(!route.exists(ParamType::Transport));
    assert!(!route.exists(ParamType::Maddr));
    assert!(route.exists_extension("x-hint"));
    assert_eq!(route.to_string(), ";lr;x-hint=1");
}

#[test]
fn test_extension_removal_is_case_sensitive() {
    let mut cat = start_line(";X-Trace=1;x-trace=2");
    assert_eq!(cat.extension("X-TRACE").unwrap(), "1");

    cat.remove_extension("x-trace");
    assert_eq!(cat.to_string(), ";X-Trace=1");
    assert!(cat.exists_extension("x-trace"));
}

#[test]
fn test_clone_before_and_after_parse() {
    let cat = start_line(";tag=1");
    let unparsed = cat.clone();
    assert!(!unparsed.is_parsed());

    let mut parsed = cat.clone();
    parsed.ensure_parsed();
    let copy = parsed.clone();
    parsed.remove(ParamType::Tag);

    assert!(copy.is_parsed());
    assert!(copy.exists(ParamType::Tag));
    assert!(unparsed.exists(ParamType::Tag));
}

#[test]
fn test_clear() {
    let mut cat = header(HeaderName::From, ";tag=1");
    cat.ensure_parsed();
    cat.clear();

    assert!(!cat.is_parsed());
    assert!(cat.raw().is_none());
    assert!(matches!(cat.state(), ParseState::Unparsed { raw: None }));
    assert!(!cat.exists(ParamType::Tag));
    assert_eq!(cat.error_context(), "From");
}

#[test]
fn test_malformed_numeric_handling() {
    let lenient = start_line(";expires=soon;lr");
    assert_eq!(lenient.param_u32(ParamType::Expires).unwrap(), 0);
    assert_eq!(lenient.to_string(), ";expires=0;lr");

    let strict = with_config(";expires=soon;lr", strict_numeric());
    assert!(!strict.exists(ParamType::Expires));
    assert_eq!(strict.extension("expires").unwrap(), "soon");
    assert_eq!(strict.to_string(), ";lr;expires=soon");
}

#[test]
fn test_config_from_json_drives_parse() {
    let config = ParseConfig::from_json(r#"{"normalize_extension_names": true}"#).unwrap();
    let cat = with_config(";X-Foo=Bar", config);
    assert_eq!(cat.to_string(), ";x-foo=Bar");
}

#[test]
fn test_value_categories() {
    let mut event: ParserCategory<Token> =
        ParserCategory::new("presence;id=1", HeaderName::Event);
    assert_eq!(event.value(), &Token::new("presence"));
    *event.param_mut(ParamType::Id) = ParamValue::data("2");
    assert_eq!(event.to_string(), "presence;id=2");

    let ct: ParserCategory<MediaType> = ParserCategory::new(
        "multipart/mixed;boundary=unique-boundary-1 \r\n",
        HeaderName::ContentType,
    );
    assert_eq!(ct.value().subtype, "mixed");
    assert_eq!(ct.param_str(ParamType::Boundary).unwrap(), "unique-boundary-1");
    assert_eq!(ct.to_string(), "multipart/mixed;boundary=unique-boundary-1");
}

#[test]
fn test_unknown_tag_is_never_stored() {
    let mut cat = start_line(";lr");
    let unregistered = ParamType::from_name(b"x-custom");
    assert_eq!(unregistered, ParamType::Unknown);

    *cat.param_mut(unregistered) = ParamValue::data("ignored");
    assert!(Parameter::new(ParamType::Unknown, ParamValue::Exists).is_err());

    assert!(!cat.exists(ParamType::Unknown));
    assert_eq!(cat.parameters().typed().len(), 1);
    assert_eq!(cat.to_string(), ";lr");
}

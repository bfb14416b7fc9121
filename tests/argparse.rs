use satchel::argparse::{ArgumentParser, ConfigError, Nargs, RetrievalError};

#[test]
fn summer() {
    let mut parser = ArgumentParser::new("summer", "Sum the inputs.");
    parser
        .add_argument(["item"])
        .unwrap()
        .nargs(Nargs::AtLeastOne)
        .help("The items to sum.");
    parser
        .add_argument(["-m", "--multiplier"])
        .unwrap()
        .default_value(1)
        .help("Scale the sum.");

    parser
        .parse_tokens(&["summer", "1", "2", "3", "-m", "10"])
        .unwrap();

    let items: Vec<i64> = parser.get_all("item").unwrap();
    let multiplier: i64 = parser.get("multiplier").unwrap();
    assert_eq!(items.iter().sum::<i64>() * multiplier, 60);
}

#[test]
fn shorthand_arities() {
    let mut parser = ArgumentParser::new("prog", "");
    parser
        .add_argument(["first"])
        .unwrap()
        .nargs(Nargs::try_from("?").unwrap())
        .default_value("none");
    parser
        .add_argument(["--rest", "-r"])
        .unwrap()
        .nargs(Nargs::try_from("*").unwrap());

    parser
        .parse_tokens(&["prog", "one", "-r", "a", "b"])
        .unwrap();

    assert_eq!(parser.get::<String>("first").unwrap(), "one".to_string());
    assert_eq!(
        parser.get_all::<String>("rest").unwrap(),
        vec!["a".to_string(), "b".to_string()]
    );
}

#[test]
fn usage_error_exit_code() {
    let mut parser = ArgumentParser::new("prog", "");
    parser.add_argument(["foo"]).unwrap().nargs(Nargs::Exactly(2));

    assert_eq!(parser.parse_tokens(&["prog", "only"]), Err(1));
}

#[test]
fn help_exit_code() {
    let mut parser = ArgumentParser::new("prog", "");

    assert_eq!(parser.parse_tokens(&["prog", "--help"]), Err(0));
}

#[test]
fn declaration_errors_are_catchable() {
    let mut parser = ArgumentParser::new("prog", "");

    assert_eq!(
        parser.add_argument(["foo", "-f"]).unwrap_err(),
        ConfigError::MixedNames
    );
    assert_eq!(
        parser.add_argument(Vec::<String>::default()).unwrap_err(),
        ConfigError::EmptyNames
    );
}

#[test]
fn typed_retrieval_failure() {
    let mut parser = ArgumentParser::new("prog", "");
    parser.add_argument(["count"]).unwrap();
    parser.parse_tokens(&["prog", "twelve"]).unwrap();

    match parser.get::<u32>("count") {
        Err(RetrievalError::InvalidValue { name, value, .. }) => {
            assert_eq!(name, "count".to_string());
            assert_eq!(value, "twelve".to_string());
        }
        other => panic!("unexpected result: {other:?}"),
    }

    assert_eq!(parser.try_get::<u32>("count"), None);
    assert_eq!(parser.try_get::<String>("count"), Some("twelve".to_string()));
}

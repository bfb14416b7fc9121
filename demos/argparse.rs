use satchel::argparse::{ArgumentParser, Nargs};

fn main() {
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

    parser.parse_args();

    let items: Vec<i64> = parser.get_all("item").unwrap();
    let multiplier: i64 = parser.get("multiplier").unwrap();

    println!("{}", items.iter().sum::<i64>() * multiplier);
}

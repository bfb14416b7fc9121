use satchel::term::{cursor, Bg, Fg, Style};

fn main() {
    println!("{}bold{}", Style::Bold, Style::Reset);
    println!("{}underline{}", Style::Underline, Style::Reset);
    println!("{}{}red on white{}", Fg::DarkRed, Bg::White, Style::Reset);
    println!("{}sunset{}", Fg::Rgb(255, 128, 0), Style::Reset);

    // Overwrite the previous line.
    print!("{}", cursor::up(1));
    println!("{}sunrise{}", Fg::Rgb(255, 200, 0), Style::Reset);
}

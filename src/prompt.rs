//! Filter selection via single-keystroke menus.
//!
//! Presents numbered choices, reads one key in raw mode, and re-prompts on
//! invalid input. Only validated enum values ever leave this module; the
//! core never sees an out-of-range selection.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{self, Clear, ClearType};

use bikeshare_explorer::model::{City, DayFilter, MonthFilter};
use bikeshare_explorer::stats::series::ChartDimension;

/// Clears the terminal and homes the cursor.
pub fn clear_screen() -> Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    Ok(())
}

/// Asks for the city, month, and day filters, one menu at a time.
pub fn get_filters() -> Result<(City, MonthFilter, DayFilter)> {
    clear_screen()?;
    println!("Hello! Let's explore some US bikeshare data!\n");

    let cities: Vec<(&str, City)> = City::ALL
        .iter()
        .map(|city| (city.display_name(), *city))
        .collect();
    let city = pick("Pick a city to filter the data:", &cities)?;
    clear_screen()?;
    println!("You picked {}.\n", city.display_name());

    let months: Vec<(&str, MonthFilter)> = MonthFilter::CHOICES
        .iter()
        .map(|month| (month.label(), *month))
        .collect();
    println!("Now let's pick a month...\n");
    let month = pick("Filter by month:", &months)?;
    clear_screen()?;
    match month {
        MonthFilter::All => println!("You chose to display data for all months.\n"),
        m => println!("You picked {}.\n", m.label()),
    }

    let days: Vec<(&str, DayFilter)> = DayFilter::CHOICES
        .iter()
        .map(|day| (day.label(), *day))
        .collect();
    println!("Finally, pick a day to filter data:\n");
    let day = pick("Filter by day:", &days)?;
    clear_screen()?;
    match day {
        DayFilter::All => println!("You chose to display data for all days.\n"),
        d => println!("You picked {}.\n", d.label()),
    }

    println!("Analyzing data for...\n");
    println!(
        "City: {}\nMonth: {}\nDay: {}",
        city.display_name(),
        month.label(),
        day.label()
    );
    println!("{}", "-".repeat(40));

    Ok((city, month, day))
}

/// Chart menu: Gender, User Type, or no graph at all.
pub fn chart_choice() -> Result<Option<ChartDimension>> {
    loop {
        println!("\nWould you like to see a graph of travel based on:\n");
        println!("(1) Gender");
        println!("(2) User Type");
        println!("(3) No graph");

        match read_key()? {
            Some('1') => return Ok(Some(ChartDimension::Gender)),
            Some('2') => return Ok(Some(ChartDimension::UserType)),
            Some('3') => {
                println!("OK. Bye!");
                return Ok(None);
            }
            _ => {
                clear_screen()?;
                println!("Invalid input!\nEnter a number between 1 and 3.");
            }
        }
    }
}

/// Restart prompt; anything but "yes" ends the session.
pub fn confirm_restart() -> Result<bool> {
    println!("\nWould you like to restart? Enter yes or no.");
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().eq_ignore_ascii_case("yes"))
}

/// Displays a numbered menu and blocks until a valid single-key choice.
fn pick<T: Copy>(title: &str, options: &[(&str, T)]) -> Result<T> {
    loop {
        println!("{title}");
        for (index, (label, _)) in options.iter().enumerate() {
            println!("({}) {}", index + 1, label);
        }
        io::stdout().flush()?;

        if let Some(key) = read_key()? {
            if let Some(digit) = key.to_digit(10) {
                let index = digit as usize;
                if (1..=options.len()).contains(&index) {
                    return Ok(options[index - 1].1);
                }
            }
        }
        clear_screen()?;
        println!("Invalid input! Try again.\n");
    }
}

/// Blocks until a key press; returns the character, if printable.
fn read_key() -> Result<Option<char>> {
    let _guard = RawModeGuard::enable()?;
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                anyhow::bail!("interrupted");
            }
            return Ok(match key.code {
                KeyCode::Char(c) => Some(c),
                _ => None,
            });
        }
    }
}

/// Leaves raw mode even when key reading errors out.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(RawModeGuard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

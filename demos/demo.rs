use timepoint::TimePoint;

fn main() {
    // Current time
    let now = TimePoint::now();
    println!("Today is: {}", now.full_date());
    println!("Clock: {}", now.format("H:I:S"));

    // Field accessors
    let tp = TimePoint::new(2022, 0, 1, 12, 34, 56);
    println!("Date: {}", tp.date());
    println!("Weekday: {:?}", tp.day());
    println!("Month: {} ({})", tp.month(), tp.mon());
    println!("Year: {} ('{}'s short form is {})", tp.year(), tp.year(), tp.yr());

    // Token formatting
    println!("ISO-ish: {}", tp.format("Y-D H:I:S"));
    println!("Long: {}", tp.format("L, d M Y"));
    println!("Short: {}", tp.format("y/m/d h:i:s"));

    // Sundays miss the weekday table, so L and l render empty.
    let sunday = TimePoint::from_ymd(2022, 0, 2);
    println!("A Sunday: '{}'", sunday.format("L"));

    // Relative time
    let base = TimePoint::from_ymd(2023, 8, 5);
    println!("{}", TimePoint::from_ymd(2024, 8, 5).when(&base));
    println!("{}", TimePoint::from_ymd(2023, 8, 4).when(&base));
    println!("{}", base.when(&base));
    println!("New Year 2025 was: {}", TimePoint::from_ymd(2025, 0, 1).when_now());
}

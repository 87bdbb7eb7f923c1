pub const MIN_YEAR: i32 = 1500;
pub const MAX_YEAR: i32 = 2500;

pub fn weekday(d: &str) -> Option<usize> {
    match d.to_ascii_lowercase().as_str() {
        "monday"    |  "mon" => Some(0),
        "tuesday"   |  "tue" => Some(1),
        "wednesday" |  "wed" => Some(2),
        "thursday"  |  "thu" => Some(3),
        "friday"    |  "fri" => Some(4),
        "saturday"  |  "sat" => Some(5),
        "sunday"    |  "sun" => Some(6),
        _           => None
    }
}

pub fn period(p: &str) -> Option<usize> {
    match p.to_ascii_lowercase().as_str() {
        "d" | "day"   | "days"   => Some(0),
        "w" | "week"  | "weeks"  => Some(1),
        "m" | "month" | "months" => Some(2),
        "y" | "year"  | "years"  => Some(3),
        _ => None
    }
}

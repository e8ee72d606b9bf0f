use crate::core::{Dataset, Record};

/// Target attribute of the play-tennis table.
pub const TARGET: &str = "Play";

/// Builds a record from attribute/value pairs, in the given order.
pub fn record(pairs: &[(&str, &str)]) -> Record {
    pairs.iter().copied().collect()
}

/// The classic 14-row "play tennis" table (9 Yes / 5 No). Splitting it on
/// information gain selects Outlook at the root, with the Overcast branch
/// pure.
pub fn play_tennis_records() -> Vec<Record> {
    let rows: [[&str; 5]; 14] = [
        ["Sunny", "Hot", "High", "Weak", "No"],
        ["Sunny", "Hot", "High", "Strong", "No"],
        ["Overcast", "Hot", "High", "Weak", "Yes"],
        ["Rain", "Mild", "High", "Weak", "Yes"],
        ["Rain", "Cool", "Normal", "Weak", "Yes"],
        ["Rain", "Cool", "Normal", "Strong", "No"],
        ["Overcast", "Cool", "Normal", "Strong", "Yes"],
        ["Sunny", "Mild", "High", "Weak", "No"],
        ["Sunny", "Cool", "Normal", "Weak", "Yes"],
        ["Rain", "Mild", "Normal", "Weak", "Yes"],
        ["Sunny", "Mild", "Normal", "Strong", "Yes"],
        ["Overcast", "Mild", "High", "Strong", "Yes"],
        ["Overcast", "Hot", "Normal", "Weak", "Yes"],
        ["Rain", "Mild", "High", "Strong", "No"],
    ];

    rows.into_iter()
        .map(|[outlook, temp, humidity, wind, play]| {
            record(&[
                ("Outlook", outlook),
                ("Temp", temp),
                ("Humidity", humidity),
                ("Wind", wind),
                (TARGET, play),
            ])
        })
        .collect()
}

pub fn play_tennis_features() -> Vec<String> {
    ["Outlook", "Temp", "Humidity", "Wind"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

pub fn play_tennis() -> Dataset {
    Dataset::new(play_tennis_records(), play_tennis_features(), TARGET)
        .expect("play-tennis fixture is well formed")
}

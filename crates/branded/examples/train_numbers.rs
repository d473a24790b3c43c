//! Composing branded types: a train number is a digits-only string of
//! exactly 4 or exactly 6 characters.

use branded::prelude::*;

enum StringOfDigits {}
enum Length4 {}
enum Length6 {}

type TrainNumber = Branded<String, Meet<StringOfDigits, Join<Length4, Length6>>>;

fn main() {
    let digits_only = TypeHandler::<String, StringOfDigits>::new(digits());
    let four = TypeHandler::<String, Length4>::new(exact_length(4));
    let six = TypeHandler::<String, Length6>::new(exact_length(6));

    let four_or_six = union(&four, &six);
    let train = intersection(&digits_only, &four_or_six);

    println!("Casting train number candidates:\n");
    for candidate in ["2599", "256899", "12345", "12a4", "12a"] {
        match train.cast(candidate.to_string()) {
            Ok(number) => println!("ok   {number}"),
            Err(error) => println!("err  {error}"),
        }
    }

    // Lift a whole timetable at once; the first offender aborts the batch.
    let timetable: Vec<TrainNumber> =
        match train.cast_array(vec!["2599".to_string(), "256899".to_string()]) {
            Ok(timetable) => timetable,
            Err(error) => {
                println!("\ntimetable rejected: {error}");
                return;
            }
        };
    println!("\ntimetable of {} trains branded", timetable.len());
}

use sumstats::core::sum_numbers;

fn main() {
    let numbers: Vec<i64> = std::env::args()
        .skip(1)
        .map(|arg| arg.parse().expect("argument is not an integer"))
        .collect();

    let total: i64 = sum_numbers(numbers);
    println!("{total}");
}

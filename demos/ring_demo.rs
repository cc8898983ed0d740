//! Builds rings over several element types and renders them as text.

use ring_list::List;

fn main() {
    let mut ints = List::from([1, 2, 3]);
    println!("ints:    {}", ints);

    ints.push_back(4);
    ints.insert(2, 10);
    println!("ints:    {}", ints);

    if let Some(tail) = ints.pop_back() {
        println!("popped:  {}", tail);
    }
    println!("ints:    {}", ints);

    let floats = List::from([1.1, 2.2, 3.3]);
    println!("floats:  {}", floats);

    let words: List<String> = ["hello", "world"].iter().map(|s| s.to_string()).collect();
    println!("words:   {}", words);

    let nothing: List<i32> = List::new();
    println!("nothing: {}", nothing);
}

extern crate entity_sparse_set;
use entity_sparse_set::{SparseSet, SparseSetRegistry};

struct Name(&'static str);
struct Health(i32);

fn main() {
    // RUST_LOG=trace shows page allocations and relocations
    env_logger::init();

    let mut elements = SparseSet::new();
    elements.add(10, "1").unwrap();
    elements.add(20, "2").unwrap();
    elements.add(30, "3").unwrap();

    elements.remove(20).unwrap();
    elements.add(40, "4").unwrap();

    if !elements.contains(20) {
        println!("Value 2 is not in the container");
    }

    // Prints 1 3 4
    for v in elements.entries() {
        print!("{} ", v);
    }
    println!();

    // Prints 10 30 40
    for id in elements.registered_ids() {
        print!("{} ", id);
    }
    println!();

    if let Err(error) = elements.add(30, "again") {
        println!("{}", error);
    }

    let mut components = SparseSetRegistry::new();
    components.register::<Name>().add(1, Name("player")).unwrap();
    components.register::<Name>().add(2, Name("enemy")).unwrap();
    components.register::<Health>().add(2, Health(30)).unwrap();

    // the enemy dies, drop it from every storage
    let removed_from = components.remove_all(2);
    println!("entity 2 removed from {} storages", removed_from);

    if let Some(names) = components.get::<Name>() {
        for (id, name) in names {
            println!("{} is still around as {}", name.0, id);
        }
    }
    if let Some(healths) = components.get::<Health>() {
        let total: i32 = healths.entries().iter().map(|health| health.0).sum();
        println!("{} health left over {} entities", total, healths.len());
    }
}

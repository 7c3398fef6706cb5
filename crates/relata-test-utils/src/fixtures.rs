//! Sample programs

/// A small taxonomy with one negative edge
pub const TAXONOMY: &str = "\
cat is mammal
mammal is animal
animal isnt plant
";

/// Conflicting statements about one pair
pub const CONTRADICTION: &str = "\
sky is blue
sky isnt blue
";

/// A guarded output line
pub const GUARDED_OUTPUT: &str = "\
cat is animal
is cat animal say yes
isnt cat animal say no
";

/// A header with a block of relationships
pub const BLOCK_PROGRAM: &str = "\
facts
  cat is animal
  animal isnt plant
is cat plant say wrong
isnt cat plant say right
";

/// `c0 is c1`, `c1 is c2`, ... with `links` statements
pub fn sequential_chain(links: usize) -> String {
    (0..links)
        .map(|i| format!("c{} is c{}\n", i, i + 1))
        .collect()
}

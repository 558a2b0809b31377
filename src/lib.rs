/*!
A library for reading propositional formulas and examining their truth tables.

A formula is read in two steps:
- The [scanner] converts text to tokens, fixing an alphabetical table of variables.
- The [parser] builds a [Prop](prop_tree::Prop) from the tokens.

[Formula::parse](prop_tree::Formula::parse) does both, and keeps the formula together with its source, formatted text, and variables.

From a formula:
- [truth_table] enumerates assignments, classifies the formula as a tautology, contingency, or contradiction, and builds a full truth table.
- [joint] checks whether a collection of formulas may be true together.

# Example

```rust
# use truthtable::{prop_tree::Formula, truth_table::{classify, Classification}};
let formula = Formula::parse("p -> q -> r").unwrap();
assert_eq!(formula.formatted, "((p → q) → r)");
assert_eq!(classify(&formula), Classification::Contingency);
```
*/

pub mod config;
pub mod err;
pub mod joint;
pub mod misc;
pub mod parser;
pub mod prop_tree;
pub mod scanner;
pub mod session;
pub mod truth_table;

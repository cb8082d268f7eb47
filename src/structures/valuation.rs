/*!
A (partial) function from atoms to truth values.

If every atom is assigned a value the valuation is 'complete', otherwise the valuation is
'partial'.

The canonical representation of a valuation is a vector of optional booleans whose length is the
number of atoms in the context, such that for a valuation 𝐯 represented by a vector *v*:
- *v*\[a\] = Some(true) *if and only if* 𝐯(a) = true.
- *v*\[a\] = Some(false) *if and only if* 𝐯(a) = false.
- *v*\[a\] = None *if and only if* 𝐯(a) is undefined.

```rust
# use stoat_sat::structures::valuation::Valuation;
let valuation = vec![Some(true), None, Some(false), None];

assert_eq!(valuation.value_of(0), Some(true));
assert_eq!(valuation.value_of(1), None);
assert_eq!(valuation.unvalued_atoms().collect::<Vec<_>>(), vec![1, 3]);
assert!(!valuation.is_complete());
```
*/

use crate::structures::atom::Atom;

/// The canonical representation of a valuation.
pub type CValuation = Vec<Option<bool>>;

/// Something which stores some value of an atom and/or the information that the atom has no
/// value.
pub trait Valuation {
    /// Some value of an atom under the valuation, or otherwise nothing.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// An iterator over the values of atoms in the valuation, in strict, contiguous, atom order.
    fn values(&self) -> impl Iterator<Item = Option<bool>>;

    /// An iterator over the atoms which do not have some value, in atom order.
    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom>;

    /// A count of all atoms in the valuation.
    fn atom_count(&self) -> usize;

    /// Whether every atom in the valuation has some value.
    fn is_complete(&self) -> bool;
}

impl Valuation for CValuation {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.get(atom as usize).copied().flatten()
    }

    fn values(&self) -> impl Iterator<Item = Option<bool>> {
        self.iter().copied()
    }

    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter()
            .enumerate()
            .filter(|(_, value)| value.is_none())
            .map(|(atom, _)| atom as Atom)
    }

    fn atom_count(&self) -> usize {
        self.len()
    }

    fn is_complete(&self) -> bool {
        self.iter().all(|value| value.is_some())
    }
}

/*!
(The internal representation of) an atom, aka. a 'variable'.

Internal to a context, the atoms are a contiguous block [0..*m*) for some *m*.
This allows an atom to be used as the index of a structure, and in particular as the index of its
value on a [valuation](crate::structures::valuation).

Externally, a variable is identified by the magnitude of the integers used to write its literals.
The mapping between the two representations is kept in the
[atom database](crate::db::atoms::AtomDB) of a context, and is of no interest to a solve.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
///
/// Limited by the representation of literals as non-zero [i32]s rather than by [Atom::MAX].
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();

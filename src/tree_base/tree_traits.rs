use std::fmt::Debug;
use std::marker::PhantomData;

// Traits bound
pub trait KeyComparator<T>: Clone + Debug {
    fn new() -> Self;
    fn less(&self, lhs: &T, rhs: &T) -> bool;
}

/// Compile-time configuration of a tree: key and value types, the ordering
/// used for keys, and whether every mutation re-audits the whole structure.
pub trait TreeParams {
    type KeyType: Debug;
    type ValueType;
    type KeyCompareType: KeyComparator<Self::KeyType>;
    const SELF_VERIFY: bool;
}

pub struct TreeConfig<TKey, TValue, TCompare, const VERIFY: bool = false> {
    _phantom_key: PhantomData<TKey>,
    _phantom_value: PhantomData<TValue>,
    _phantom_compare: PhantomData<TCompare>,
}

impl<TKey: Debug, TValue, TCompare: KeyComparator<TKey>, const VERIFY: bool> TreeParams
    for TreeConfig<TKey, TValue, TCompare, VERIFY>
{
    type KeyType = TKey;
    type ValueType = TValue;
    type KeyCompareType = TCompare;
    const SELF_VERIFY: bool = VERIFY;
}

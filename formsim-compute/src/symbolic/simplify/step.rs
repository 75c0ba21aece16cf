/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `3/12 = 1/4`
    /// `12/3 = 4`
    ReduceFraction,

    /// `a+a = 2a`
    /// `2a+3a = 5a`
    CombineLikeTerms,

    /// `a*a = a^2`
    /// `a^2*a^3 = a^5`
    CombineLikeFactors,

    /// `a^0 = 1`
    PowerZero,

    /// `0^a = 0`
    PowerZeroLeft,

    /// `1^a = 1`
    PowerOneLeft,

    /// `a^1 = a`
    PowerOne,

    /// `(a^b)^c = a^(b*c)`
    PowerPower,

    /// `2^3 = 8`
    IntegerPower,

    /// `a*(b+c) = a*b + a*c`
    DistributiveProperty,

    /// `(a*b)^c = a^c*b^c`
    DistributePower,

    /// `(a+b)^2 = a*a + a*b + b*a + b*b`
    ExpandPower,
}

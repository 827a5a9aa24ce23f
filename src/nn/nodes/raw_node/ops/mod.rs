mod sum;

pub(in crate::nn) use sum::Sum;

/*!
This crate contains the domain of the Klang river dashboard: the water quality [`Parameter`](dataset/enum.Parameter.html)s and the synthetic [`SampleTable`](dataset/struct.SampleTable.html) generated from them, the rule based pollution [`classify`](classifier/fn.classify.html)er, and the static pollution distribution.
*/

pub mod classifier;
pub mod dataset;
pub mod pollution;

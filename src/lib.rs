//! Testbed comparing a plain sequential quicksort against a fork-join parallel variant with
//! depth-limited task spawning and a sequential fallback threshold. Both share the same Lomuto
//! partition, so any measured difference comes from the dispatch strategy alone.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Send,
            {
                sort(arr);
            }
        }
    };
}

pub mod parallel;
pub mod partition;
pub mod sequential;

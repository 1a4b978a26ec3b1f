//! Property tests for sharding, merge planning and collision detection.

use proptest::prelude::*;

use genshard::domain::services::merge_planner::plan_merge;
use genshard::domain::services::sharder::{final_dir, shard};
use genshard::domain::services::TaskBuilder;
use genshard::domain::value_objects::{Property, Template};
use genshard::{GenError, InputFile, OutputTemplate, ShardSize};

const GEN_ROOT: &str = "out/.intermediates/pkg/m/gen";

fn inputs(n: usize) -> Vec<InputFile> {
    (0..n)
        .map(|i| InputFile::new("pkg", format!("src/f{}.txt", i)))
        .collect()
}

fn build(inputs: &[InputFile], size: usize) -> Result<Vec<genshard::GenerationTask>, GenError> {
    let output = OutputTemplate::parse("$(SRC:BASE).out").unwrap();
    let cmd = Template::parse("gen $(SRC) > $(OUT)", Property::Cmd).unwrap();
    TaskBuilder::new(GEN_ROOT, &output, &cmd, ShardSize::new(size).unwrap()).build(inputs)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: N inputs in shards of S make ceil(N/S) contiguous shards.
    #[test]
    fn property_shards_partition_in_order(n in 0usize..300, size in 1usize..50) {
        let items: Vec<usize> = (0..n).collect();
        let size = ShardSize::new(size).unwrap();
        let shards = shard(&items, size);

        prop_assert_eq!(shards.len(), n.div_ceil(size.get()));
        prop_assert_eq!(shards.len(), size.shard_count(n));
        prop_assert!(shards.iter().all(|s| !s.is_empty() && s.len() <= size.get()));
        let rebuilt: Vec<usize> = shards.concat();
        prop_assert_eq!(rebuilt, items);
    }

    /// PROPERTY: Tasks cover every input once, in order, one task per shard.
    #[test]
    fn property_tasks_reconstruct_inputs(n in 1usize..120, size in 1usize..40) {
        let inputs = inputs(n);
        let tasks = build(&inputs, size).unwrap();

        prop_assert_eq!(tasks.len(), n.div_ceil(size));
        let rebuilt: Vec<InputFile> = tasks.iter().flat_map(|t| t.inputs.clone()).collect();
        prop_assert_eq!(&rebuilt, &inputs);
        for (i, task) in tasks.iter().enumerate() {
            prop_assert_eq!(task.shard, i);
            prop_assert_eq!(task.shards, tasks.len());
            prop_assert_eq!(task.outputs.len(), task.inputs.len());
        }
    }

    /// PROPERTY: Only sharded plans get a merge step, and it copies every output.
    #[test]
    fn property_merge_only_when_sharded(n in 1usize..120, size in 1usize..40) {
        let tasks = build(&inputs(n), size).unwrap();
        let merge = plan_merge(GEN_ROOT, &tasks);

        if tasks.len() == 1 {
            prop_assert!(merge.is_none());
            prop_assert!(tasks[0].copy_to.is_empty());
            prop_assert_eq!(&tasks[0].gen_dir, &final_dir(GEN_ROOT));
        } else {
            let merge = merge.unwrap();
            prop_assert!(merge.is_consistent());
            prop_assert_eq!(merge.outputs().len(), n);
            prop_assert_eq!(merge.inputs().len(), n);
            let final_prefix = format!("{}/", final_dir(GEN_ROOT));
            prop_assert!(merge.outputs().iter().all(|o| o.starts_with(&final_prefix)));
        }
    }

    /// PROPERTY: Two inputs expanding to the same output always collide, across shards too.
    #[test]
    fn property_collisions_name_both_inputs(
        dir_a in "[a-z]{1,6}",
        dir_b in "[a-z]{1,6}",
        name in "[a-z]{1,6}",
        fillers in 0usize..20,
        size in 1usize..5,
    ) {
        prop_assume!(dir_a != dir_b);
        let mut all = vec![InputFile::new("pkg", format!("{}/{}.txt", dir_a, name))];
        all.extend((0..fillers).map(|i| InputFile::new("pkg", format!("fill/x{}.txt", i))));
        all.push(InputFile::new("pkg", format!("{}/{}.txt", dir_b, name)));

        let output = OutputTemplate::parse("$(SRC:BASE.EXT)").unwrap();
        let cmd = Template::parse("true", Property::Cmd).unwrap();
        let err = TaskBuilder::new(GEN_ROOT, &output, &cmd, ShardSize::new(size).unwrap())
            .build(&all)
            .unwrap_err();

        match err {
            GenError::OutputCollision { first, second, output } => {
                prop_assert_eq!(first, format!("pkg/{}/{}.txt", dir_a, name));
                prop_assert_eq!(second, format!("pkg/{}/{}.txt", dir_b, name));
                prop_assert_eq!(output, format!("{}.txt", name));
            }
            other => prop_assert!(false, "expected collision, got {:?}", other),
        }
    }
}

//! Property checks of the dispatch engine over seeded random shops.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use u_dispatch::dispatching::rules::{Edd, Spt};
use u_dispatch::dispatching::{Candidate, DispatchEngine, DispatchPolicy, DispatchRule, RuleScore};
use u_dispatch::models::{Job, Machine, Operation, Schedule, Workcenter};
use u_dispatch::validation::validate_input;

const SEEDS: std::ops::Range<u64> = 0..25;

fn random_shop(rng: &mut StdRng, max_machines: usize) -> Vec<Workcenter> {
    let count = rng.random_range(1..=3);
    (0..count)
        .map(|w| {
            let machines = rng.random_range(1..=max_machines);
            (0..machines).fold(Workcenter::new(format!("W{w}")), |wc, m| {
                wc.with_machine(
                    Machine::new(format!("W{w}M{m}")).with_release(rng.random_range(0..3) as f64),
                )
            })
        })
        .collect()
}

fn random_jobs(rng: &mut StdRng, shop: &[Workcenter], max_ops: usize) -> Vec<Job> {
    let count = rng.random_range(1..=12);
    (0..count)
        .map(|j| {
            let ops = rng.random_range(0..=max_ops);
            let mut job = Job::new(format!("J{j}"))
                .with_release(rng.random_range(0..10) as f64)
                .with_due(rng.random_range(0..30) as f64)
                .with_weight(rng.random_range(1..4) as f64);
            for _ in 0..ops {
                let wc = &shop[rng.random_range(0..shop.len())];
                job = job.with_operation(Operation::new(
                    wc.name.clone(),
                    rng.random_range(0..8) as f64,
                ));
            }
            job
        })
        .collect()
}

fn for_each_instance(max_machines: usize, max_ops: usize, mut check: impl FnMut(&[Job], &[Workcenter])) {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let shop = random_shop(&mut rng, max_machines);
        let jobs = random_jobs(&mut rng, &shop, max_ops);
        assert!(validate_input(&jobs, &shop).is_ok());
        check(&jobs, &shop);
    }
}

fn job<'a>(jobs: &'a [Job], id: &str) -> &'a Job {
    jobs.iter().find(|j| j.job_id == id).unwrap()
}

/// Wraps a rule and records, for every step, the candidates' scores and the pick.
#[derive(Debug)]
struct Recording<R> {
    inner: R,
    steps: Mutex<Vec<(Vec<RuleScore>, usize)>>,
}

impl<R> Recording<R> {
    fn new(inner: R) -> Self {
        Self {
            inner,
            steps: Mutex::new(Vec::new()),
        }
    }
}

impl<R: DispatchRule> DispatchRule for Recording<R> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn evaluate(&self, candidate: &Candidate<'_>) -> RuleScore {
        self.inner.evaluate(candidate)
    }

    fn select(&self, candidates: &[Candidate<'_>]) -> Option<usize> {
        let pick = self.inner.select(candidates)?;
        let scores = candidates.iter().map(|c| self.inner.evaluate(c)).collect();
        self.steps.lock().unwrap().push((scores, pick));
        Some(pick)
    }
}

#[test]
fn concrete_scenario() {
    let shop = vec![Workcenter::new("W")
        .with_machine(Machine::new("M1"))
        .with_machine(Machine::new("M2"))];
    let jobs = vec![
        Job::new("J1").with_due(10.0).with_operation(Operation::new("W", 3.0)),
        Job::new("J2").with_due(5.0).with_operation(Operation::new("W", 1.0)),
        Job::new("J3").with_due(8.0).with_operation(Operation::new("W", 2.0)),
    ];
    let engine = DispatchEngine::new();

    for policy in [DispatchPolicy::Edd, DispatchPolicy::Spt] {
        let s = engine.run(policy, &jobs, &shop).unwrap();
        assert_eq!(s.rule, policy.name());
        assert_eq!(s.makespan, 4.0);
        assert_eq!(s.machine("M1").unwrap().job_ids, vec!["J2", "J1"]);
        assert_eq!(s.machine("M2").unwrap().job_ids, vec!["J3"]);
    }

    let fcfs = engine.run(DispatchPolicy::Fcfs, &jobs, &shop).unwrap();
    assert_eq!(fcfs.machine("M1").unwrap().job_ids, vec!["J1"]);
    assert_eq!(fcfs.machine("M2").unwrap().job_ids, vec!["J2", "J3"]);
    assert_eq!(fcfs.makespan, 3.0);
}

#[test]
fn every_operation_assigned_once_to_its_workcenter() {
    for_each_instance(3, 3, |jobs, shop| {
        for policy in DispatchPolicy::ALL {
            let s = DispatchEngine::new().run(policy, jobs, shop).unwrap();
            let expected: usize = jobs.iter().map(|j| j.operations.len()).sum();
            assert_eq!(s.assignment_count(), expected);

            for job in jobs {
                let mut ops: Vec<usize> = s
                    .assignments_for_job(&job.job_id)
                    .iter()
                    .map(|a| a.operation)
                    .collect();
                ops.sort_unstable();
                assert_eq!(ops, (0..job.operations.len()).collect::<Vec<_>>());
            }
            for a in &s.assignments {
                let op = &job(jobs, &a.job_id).operations[a.operation];
                assert_eq!(a.workcenter, op.workcenter);
                let wc = shop.iter().find(|w| w.name == op.workcenter).unwrap();
                assert!(wc.machine(&a.machine).is_some());
                assert_eq!(a.duration(), op.processing_time);
            }
            for ms in &s.machines {
                let committed: Vec<&str> = s
                    .assignments_for_machine(&ms.machine)
                    .iter()
                    .map(|a| a.job_id.as_str())
                    .collect();
                assert_eq!(ms.job_ids, committed);
            }
        }
    });
}

#[test]
fn machine_end_times_non_decreasing() {
    for_each_instance(3, 3, |jobs, shop| {
        for policy in DispatchPolicy::ALL {
            let s = DispatchEngine::new().run(policy, jobs, shop).unwrap();
            for ms in &s.machines {
                let ends: Vec<f64> = s
                    .assignments_for_machine(&ms.machine)
                    .iter()
                    .map(|a| a.end)
                    .collect();
                assert!(ends.windows(2).all(|w| w[0] <= w[1]), "{policy} {}: {ends:?}", ms.machine);
            }
        }
    });
}

#[test]
fn release_time_floor() {
    for_each_instance(3, 3, |jobs, shop| {
        for precedence in [false, true] {
            let engine = DispatchEngine::new().with_routing_precedence(precedence);
            for policy in DispatchPolicy::ALL {
                let s = engine.run(policy, jobs, shop).unwrap();
                for a in &s.assignments {
                    assert!(a.start >= job(jobs, &a.job_id).release);
                }
            }
        }
    });
}

#[test]
fn makespan_covers_every_machine() {
    for_each_instance(3, 3, |jobs, shop| {
        for policy in DispatchPolicy::ALL {
            let s = DispatchEngine::new().run(policy, jobs, shop).unwrap();
            let total_machines: usize = shop.iter().map(|w| w.machine_count()).sum();
            assert_eq!(s.machines.len(), total_machines);
            if s.assignments.is_empty() {
                assert_eq!(s.makespan, 0.0);
            } else {
                let latest_end = s.assignments.iter().map(|a| a.end).fold(0.0, f64::max);
                assert!(s.makespan >= latest_end);
            }
        }
    });
}

#[test]
fn fcfs_keeps_release_order_per_machine() {
    for_each_instance(3, 1, |jobs, shop| {
        let s = DispatchEngine::new().run(DispatchPolicy::Fcfs, jobs, shop).unwrap();
        for ms in &s.machines {
            let releases: Vec<f64> = ms.job_ids.iter().map(|id| job(jobs, id).release).collect();
            assert!(releases.windows(2).all(|w| w[0] <= w[1]), "{}: {releases:?}", ms.machine);
        }
    });
}

#[test]
fn edd_picks_minimum_due_at_every_step() {
    for_each_instance(3, 3, |jobs, shop| {
        let rule = Recording::new(Edd);
        DispatchEngine::new().run_dynamic(&rule, jobs, shop).unwrap();
        for (scores, pick) in rule.steps.lock().unwrap().iter() {
            assert!(scores.iter().all(|&s| scores[*pick] <= s));
        }
    });
}

#[test]
fn spt_picks_shortest_next_operation_at_every_step() {
    for_each_instance(3, 3, |jobs, shop| {
        let rule = Recording::new(Spt);
        let s = DispatchEngine::new().run_dynamic(&rule, jobs, shop).unwrap();
        let steps = rule.steps.lock().unwrap();
        assert_eq!(steps.len(), s.assignment_count());
        for (scores, pick) in steps.iter() {
            assert!(scores[*pick].is_finite());
            assert!(scores.iter().all(|&s| scores[*pick] <= s));
        }
    });
}

#[test]
fn makespan_monotone_on_single_machine() {
    // Single machine with a fixed job order: longer operations never finish earlier.
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let shop = vec![Workcenter::new("W0").with_machine(Machine::new("M"))];
        let jobs = random_jobs(&mut rng, &shop, 2);

        for policy in [DispatchPolicy::Edd, DispatchPolicy::Fcfs] {
            let base = DispatchEngine::new().run(policy, &jobs, &shop).unwrap();
            for (j, job) in jobs.iter().enumerate() {
                for o in 0..job.operations.len() {
                    let mut longer = jobs.clone();
                    longer[j].operations[o].processing_time += 2.5;
                    let s = DispatchEngine::new().run(policy, &longer, &shop).unwrap();
                    assert!(s.makespan >= base.makespan, "{policy} seed {seed}");
                }
            }
        }
    }
}

#[test]
fn identical_inputs_give_identical_output() {
    for_each_instance(3, 3, |jobs, shop| {
        for policy in DispatchPolicy::ALL {
            let a = DispatchEngine::new().run(policy, jobs, shop).unwrap();
            let b = DispatchEngine::new().run(policy, jobs, shop).unwrap();
            assert_eq!(
                serde_json::to_string(&a).unwrap(),
                serde_json::to_string(&b).unwrap()
            );
        }
    });
}

#[test]
fn concurrent_runs_are_independent() {
    for_each_instance(2, 2, |jobs, shop| {
        let engine = DispatchEngine::new();
        let sequential = engine.compare(jobs, shop).unwrap();

        let parallel: Vec<Schedule> = std::thread::scope(|scope| {
            let handles: Vec<_> = DispatchPolicy::ALL
                .iter()
                .map(|&policy| {
                    let engine = &engine;
                    scope.spawn(move || engine.run(policy, jobs, shop).unwrap())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(sequential, parallel);
    });
}

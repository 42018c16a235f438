//! Guard NPC: host context and tree assembly.
//!
//! The guard rests, patrols a loop of waypoints, chases an intruder it can
//! see, and taunts it when cornered. The tree is assembled once here and then
//! ticked by `main`.

use resumable_bt::builder::{
    action, condition, leaf, priority_selector, random_selector, sequence,
};
use resumable_bt::{Activity, BehaviorTree, DeltaTime, Node, TimedAction};

/// Distance under which the intruder is visible.
pub const SIGHT_RANGE: f32 = 6.0;
/// Distance under which the intruder counts as caught.
pub const CATCH_RANGE: f32 = 0.5;
/// Distance under which the intruder is cornered.
pub const CORNER_RANGE: f32 = 1.0;
/// Distance the intruder reappears at after being caught.
pub const RESPAWN_DISTANCE: f32 = 15.0;

const MAX_STAMINA: f32 = 10.0;
const SPRINT_STAMINA: f32 = 4.0;
const SPRINT_SPEED: f32 = 3.0;
const JOG_SPEED: f32 = 1.5;
const WAYPOINTS: [&str; 4] = ["gate", "tower", "well", "stables"];

/// State the guard's tasks read and mutate.
#[derive(Clone, Debug)]
pub struct Guard {
    pub delta: f32,
    pub stamina: f32,
    pub waypoint: usize,
    pub intruder_distance: f32,
    pub catches: u32,
    pub taunts: u32,
}

impl Guard {
    pub fn new(delta: f32) -> Self {
        Self {
            delta,
            stamina: MAX_STAMINA,
            waypoint: 0,
            intruder_distance: RESPAWN_DISTANCE,
            catches: 0,
            taunts: 0,
        }
    }

    pub fn intruder_visible(&self) -> bool {
        self.intruder_distance < SIGHT_RANGE
    }

    pub fn waypoint_name(&self) -> &'static str {
        WAYPOINTS[self.waypoint % WAYPOINTS.len()]
    }

    fn drain(&mut self, rate: f32) {
        self.stamina = (self.stamina - rate * self.delta).max(0.0);
    }

    fn recover(&mut self, rate: f32) {
        self.stamina = (self.stamina + rate * self.delta).min(MAX_STAMINA);
    }

    fn close_in(&mut self, speed: f32) {
        self.intruder_distance = (self.intruder_distance - speed * self.delta).max(0.0);
    }
}

impl DeltaTime for Guard {
    fn delta_time(&self) -> f32 {
        self.delta
    }
}

/// Builds the guard tree. `seed` makes the taunt choice reproducible.
pub fn build_tree(seed: Option<u64>) -> resumable_bt::error::Result<BehaviorTree<Guard>> {
    let root = priority_selector(
        "guard",
        vec![
            idle().with_priority(0),
            patrol().with_priority(1),
            follow().with_priority(3),
            taunt(seed)?.with_priority(6),
        ],
    );

    BehaviorTree::new("guard tree", root)
}

fn idle() -> Node<Guard> {
    sequence(
        "idle",
        vec![
            condition("winded", |g: &Guard| g.stamina < MAX_STAMINA),
            leaf(
                "catch breath",
                TimedAction::new(
                    |g: &mut Guard| tracing::info!(stamina = g.stamina, "guard stops to rest"),
                    |g: &mut Guard| g.recover(4.0),
                    1.5,
                ),
            ),
        ],
    )
}

fn patrol() -> Node<Guard> {
    sequence(
        "patrol",
        vec![
            condition("has stamina", |g: &Guard| g.stamina > 3.0),
            leaf(
                "walk leg",
                TimedAction::new(
                    |g: &mut Guard| tracing::info!(to = g.waypoint_name(), "guard heads out"),
                    |g: &mut Guard| g.drain(0.5),
                    2.0,
                ),
            ),
            action("arrive", |g: &mut Guard| {
                g.waypoint = (g.waypoint + 1) % WAYPOINTS.len();
                tracing::info!(at = g.waypoint_name(), "guard reached waypoint");
            }),
        ],
    )
}

fn chase(name: &'static str, speed: f32, drain: f32) -> Node<Guard> {
    let activity = Activity::new(
        |g: &Guard| g.intruder_distance < CATCH_RANGE,
        |g: &Guard| !g.intruder_visible(),
    )
    .on_start(move |_: &mut Guard| tracing::info!(style = name, "guard gives chase"))
    .on_success(|g: &mut Guard| {
        g.catches += 1;
        g.intruder_distance = RESPAWN_DISTANCE;
        tracing::info!(catches = g.catches, "intruder caught");
    })
    .on_fail(|_: &mut Guard| tracing::info!("intruder lost"))
    .in_background(move |g: &mut Guard| {
        g.close_in(speed);
        g.drain(drain);
    });

    leaf(name, activity)
}

fn follow() -> Node<Guard> {
    sequence(
        "follow",
        vec![
            condition("intruder visible", Guard::intruder_visible),
            priority_selector(
                "follow style",
                vec![
                    sequence(
                        "sprint",
                        vec![
                            condition("fresh legs", |g: &Guard| g.stamina > SPRINT_STAMINA),
                            chase("sprint", SPRINT_SPEED, 2.0),
                        ],
                    )
                    .with_priority(1),
                    chase("jog", JOG_SPEED, 0.5).with_priority(0),
                ],
            ),
        ],
    )
}

fn taunt(seed: Option<u64>) -> resumable_bt::error::Result<Node<Guard>> {
    let lines: Vec<Node<Guard>> = ["Halt!", "Nowhere to run!", "In the name of the king!"]
        .into_iter()
        .map(|line| {
            action(line, move |g: &mut Guard| {
                g.taunts += 1;
                tracing::info!(line, "guard taunts");
            })
        })
        .collect();

    let taunts = match seed {
        Some(seed) => lines
            .into_iter()
            .try_fold(Node::random_selector_seeded("taunts", seed), Node::with_child)?,
        None => random_selector("taunts", lines),
    };

    Ok(sequence(
        "specials",
        vec![
            condition("intruder cornered", |g: &Guard| {
                g.intruder_distance < CORNER_RANGE
            }),
            taunts,
        ],
    ))
}

use saunter_engine as se;

use se::object::GameObject;
use se::reaction::{add_to_inventory, cond, fail, has_visited, inventory_has, progn, remove_from_inventory, succeed};
use se::{Outcome, Room, View, World, execute};

const NONE: &[&str] = &[];

/// Living room with a couch; bathroom to the west, basement below.
fn world() -> World {
    let mut world = World::new_empty();
    world
        .actions
        .action("go", &["walk"])
        .action("look", &["examine"])
        .action("take", &["pick up", "grab"])
        .action("drop", NONE)
        .action("inventory", &["i"])
        .action("use", NONE)
        .action("eat", NONE)
        .action("jump", NONE)
        .action("shrug", NONE);
    world
        .actions
        .on("jump", succeed("Wheee!"))
        .expect("jump")
        .on("shrug", succeed(""))
        .expect("shrug");

    world
        .directions
        .direction("east", &["e"])
        .direction("west", &["w"])
        .direction("up", &["u"])
        .direction("down", &["d"]);
    world.directions.opposite("east", "west").expect("opposite");
    world.directions.opposite("up", "down").expect("opposite");

    let mut taco = GameObject::new("taco", "A squashed taco.", &["look", "take", "drop", "eat"]);
    taco.on(
        "eat",
        cond(
            has_visited("bathroom"),
            progn(vec![remove_from_inventory(None), succeed("Delicious.")]),
            fail(""),
        ),
    );
    let mut towel = GameObject::new("towel", "A fluffy towel.", &["look", "take", "drop", "use"]);
    towel.on("take", succeed("It's a bit damp."));

    world
        .objects
        .register(
            GameObject::new("bathroom key", "A small key.", &["look", "take", "drop", "use"]),
            &["key"],
        )
        .expect("key")
        .register(towel, NONE)
        .expect("towel")
        .register(taco, NONE)
        .expect("taco")
        .object("couch", "Lumpy.", &["look"])
        .expect("couch");
    world
        .objects
        .on_use(
            "bathroom key",
            "towel",
            progn(vec![add_to_inventory(Some("taco")), succeed("Nice!")]),
            true,
        )
        .expect("pair");

    world
        .rooms
        .add(Room::new("living room", "Smells clean.", &["couch"]))
        .add(Room::new("bathroom", "A well kept bathroom.", &["towel"]))
        .add(Room::new("basement", "A dark, creepy room.", &["bathroom key"]));
    world
        .rooms
        .map("living room", "west", "bathroom", true, &world.directions)
        .expect("map")
        .map("living room", "down", "basement", true, &world.directions)
        .expect("map");

    world.start_in("basement").expect("start");
    world
}

/// Run one command and return what was narrated.
fn run(world: &mut World, input: &str) -> (Outcome, Vec<String>) {
    let mut view = View::new();
    let outcome = execute(world, &mut view, input).expect("execute");
    (outcome, view.lines())
}

fn room_objects(world: &World, room: &str) -> Vec<String> {
    world.rooms.get(room).expect("room").objects.clone()
}

#[test]
fn taking_the_bathroom_key() {
    let mut world = world();
    let (outcome, lines) = run(&mut world, "take the bathroom key");
    assert!(outcome.succeeded);
    assert_eq!(lines, vec!["You pick up the bathroom key."]);
    assert_eq!(world.character.inventory, vec!["bathroom key".to_string()]);
    assert!(room_objects(&world, "basement").is_empty());
}

#[test]
fn going_where_there_is_no_exit() {
    let mut world = world();
    let (outcome, lines) = run(&mut world, "go east");
    assert!(!outcome.succeeded);
    assert_eq!(lines, vec!["You cannot go east"]);
    assert_eq!(world.character.room, "basement");
}

#[test]
fn bidirectional_use_pair_works_in_both_orders() {
    let mut world = world();
    world.character.add_item("bathroom key");

    let (_, lines) = run(&mut world, "use key on towel");
    assert_eq!(lines, vec!["Nice!"]);
    assert_eq!(world.character.inventory, vec!["bathroom key", "taco"]);

    let (_, lines) = run(&mut world, "use towel on the key");
    assert_eq!(lines, vec!["Nice!"]);
    assert_eq!(world.character.inventory, vec!["bathroom key", "taco", "taco"]);
}

#[test]
fn eating_before_the_bathroom_is_found_fails_quietly() {
    let mut world = world();
    world.character.add_item("taco");

    let (outcome, lines) = run(&mut world, "eat taco");
    assert!(!outcome.succeeded);
    assert_eq!(lines, vec!["That didn't work."]);
    assert_eq!(world.character.inventory, vec!["taco"]);

    world.session.visit("bathroom");
    let (_, lines) = run(&mut world, "eat taco");
    assert_eq!(lines, vec!["Delicious."]);
    assert!(world.character.inventory.is_empty());
}

#[test]
fn leftover_tokens_change_nothing() {
    let mut world = world();
    let (outcome, lines) = run(&mut world, "take key please");
    assert_eq!(outcome, Outcome::failure("I don't understand."));
    assert_eq!(lines, vec!["I don't understand."]);
    assert!(world.character.inventory.is_empty());
    assert_eq!(room_objects(&world, "basement"), vec!["bathroom key"]);
}

#[test]
fn unknown_words_are_not_understood() {
    let mut world = world();
    let (_, lines) = run(&mut world, "dance");
    assert_eq!(lines, vec!["I don't understand."]);
    let (_, lines) = run(&mut world, "");
    assert_eq!(lines, vec!["I don't understand."]);
}

#[test]
fn capacity_limits_taking() {
    let mut world = world();
    world.character.capacity = Some(1);
    world.character.add_item("towel");
    let (_, lines) = run(&mut world, "grab key");
    assert_eq!(lines, vec!["You can't carry any more."]);
    assert_eq!(room_objects(&world, "basement"), vec!["bathroom key"]);
}

#[test]
fn object_callback_narrates_before_the_builtin_verb() {
    let mut world = world();
    world.start_in("bathroom").expect("move");
    let (_, lines) = run(&mut world, "pick up the towel");
    assert_eq!(lines, vec!["It's a bit damp.", "You pick up the towel."]);
    assert!(world.character.holds("towel"));
}

#[test]
fn objects_that_refuse_an_action() {
    let mut world = world();
    let (_, lines) = run(&mut world, "take couch");
    assert_eq!(lines, vec!["You don't see the couch here."]);

    world.start_in("living room").expect("move");
    let (_, lines) = run(&mut world, "take the couch");
    assert_eq!(lines, vec!["You can't take the couch."]);
    assert_eq!(room_objects(&world, "living room"), vec!["couch"]);
}

#[test]
fn enter_hook_can_bar_the_door() {
    let mut world = world();
    world.character.on_enter(
        "bathroom",
        cond(
            inventory_has("bathroom key"),
            succeed("The key turns."),
            fail("The bathroom door is locked."),
        ),
    );
    run(&mut world, "go up");
    assert_eq!(world.character.room, "living room");

    let (outcome, lines) = run(&mut world, "walk w");
    assert!(!outcome.succeeded);
    assert_eq!(lines, vec!["The bathroom door is locked."]);
    assert_eq!(world.character.room, "living room");
    assert!(!world.session.has_visited("bathroom"));

    world.character.add_item("bathroom key");
    let (_, lines) = run(&mut world, "go west");
    assert_eq!(world.character.room, "bathroom");
    assert_eq!(
        lines,
        vec![
            "The key turns.",
            "Bathroom",
            "    A well kept bathroom.",
            "",
            "Living Room is to the east.",
            "There is a towel here.",
        ]
    );
}

#[test]
fn silence_lasts_for_one_turn() {
    let mut world = world();
    world
        .character
        .on_exit("basement", succeed("You hurry up the stairs.").silenced());

    let (_, lines) = run(&mut world, "go up");
    assert_eq!(world.character.room, "living room");
    assert_eq!(lines, vec!["You hurry up the stairs."]);

    let (_, lines) = run(&mut world, "look");
    assert_eq!(lines[0], "Living Room");
}

#[test]
fn action_reactions_need_a_narrated_success() {
    let mut world = world();
    let (outcome, lines) = run(&mut world, "jump");
    assert_eq!(outcome, Outcome::success("Wheee!"));
    assert_eq!(lines, vec!["Wheee!"]);

    let (outcome, lines) = run(&mut world, "shrug");
    assert!(!outcome.succeeded);
    assert_eq!(lines, vec!["That didn't work."]);
}

#[test]
fn dropping_and_listing_inventory() {
    let mut world = world();
    run(&mut world, "take key");
    let (_, lines) = run(&mut world, "i");
    assert_eq!(lines, vec!["You have a bathroom key."]);

    let (_, lines) = run(&mut world, "drop the key");
    assert_eq!(lines, vec!["You drop the bathroom key."]);
    let (_, lines) = run(&mut world, "inventory");
    assert_eq!(lines, vec!["Your inventory is empty."]);
    assert_eq!(room_objects(&world, "basement"), vec!["bathroom key"]);
}

#[test]
fn every_turn_is_counted() {
    let mut world = world();
    run(&mut world, "look");
    run(&mut world, "nonsense");
    assert_eq!(world.session.turn_count, 2);
}

#[test]
fn quiet_reactions_still_get_a_line() {
    let mut world = world();
    world.character.add_item("bathroom key");
    world
        .objects
        .on_use("bathroom key", "towel", add_to_inventory(Some("taco")), false)
        .expect("pair");
    world
        .objects
        .on("taco", "eat", remove_from_inventory(None))
        .expect("taco");

    let (outcome, lines) = run(&mut world, "use key on towel");
    assert!(outcome.succeeded);
    assert_eq!(lines, vec!["Nothing happens."]);
    assert_eq!(world.character.inventory, vec!["bathroom key", "taco"]);

    let (outcome, lines) = run(&mut world, "eat taco");
    assert!(outcome.succeeded);
    assert_eq!(lines, vec!["Done."]);
    assert_eq!(world.character.inventory, vec!["bathroom key"]);
}

#[test]
fn silenced_reactions_stay_quiet() {
    let mut world = world();
    world.character.add_item("taco");
    world
        .objects
        .on(
            "taco",
            "eat",
            progn(vec![remove_from_inventory(None), succeed("").silenced()]),
        )
        .expect("taco");

    let (outcome, lines) = run(&mut world, "eat taco");
    assert!(outcome.succeeded);
    assert!(lines.is_empty());
    assert!(world.character.inventory.is_empty());
}

#[test]
fn failing_callback_stops_the_builtin_verb() {
    let mut world = world();
    world
        .objects
        .object("armchair", "Overstuffed.", &["look", "take"])
        .expect("armchair")
        .on("armchair", "take", fail("The armchair is far too heavy."))
        .expect("callback");
    world.rooms.get_mut("basement").expect("basement").add_object("armchair");

    let (outcome, lines) = run(&mut world, "take the armchair");
    assert_eq!(outcome, Outcome::failure("The armchair is far too heavy."));
    assert_eq!(lines, vec!["The armchair is far too heavy."]);
    assert!(!lines.iter().any(|line| line.starts_with("You pick up")));
    assert!(world.character.inventory.is_empty());
    assert_eq!(room_objects(&world, "basement"), vec!["bathroom key", "armchair"]);
}

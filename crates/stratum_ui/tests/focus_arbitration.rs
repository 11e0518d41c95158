//! # Focus Arbitration Integration Tests
//!
//! At most one widget owns the mouse per frame, front layer first, then
//! insertion order. Buttons fire on the press edge only.

use std::cell::Cell;
use std::rc::Rc;

use stratum_ui::{
    BoxModel, BoxStyle, Button, Checkbox, Color, CommandList, ElementId, Font, Key, Mouse, MouseButton, Orientation, Rect, Reference, Slider,
    SliderFree, SliderRange, TextButton, TriangleButton, UiContext, UiElement, Vec2,
};

fn idle() -> BoxStyle {
    BoxStyle::new(Some(Color::BLACK), Some(Color::CYAN)).with_outline(10.0, Some(Color::CYAN))
}

fn hovered() -> BoxStyle {
    BoxStyle::new(Some(Color::CYAN), Some(Color::BLACK)).with_outline(10.0, Some(Color::BLACK))
}

fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
    let count = Rc::new(Cell::new(0));
    let handle = Rc::clone(&count);
    (count, move || handle.set(handle.get() + 1))
}

fn button(center: Vec2, size: Vec2, action: impl FnMut() + 'static) -> Button {
    Button::new(center, size, idle(), hovered(), "", Font::DEFAULT_UI, false, action)
}

/// Test: the two-layer menu - only the front text button reacts.
#[test]
fn test_front_text_button_shadows_back_triangle() {
    let center = Vec2::new(640.0, 360.0);
    let (triangle_clicks, triangle_action) = counter();
    let (text_clicks, text_action) = counter();

    let mut context = UiContext::new(2);
    let triangle = context.back_layer().add_element(TriangleButton::new(
        center,
        Vec2::new(100.0, 100.0),
        idle(),
        hovered(),
        Vec2::new(1.0, 1.0),
        0.0,
        false,
        triangle_action,
    ));
    let text = context.front_layer().add_element(TextButton::new(
        center,
        BoxStyle::new(None, Some(Color::WHITE)),
        BoxStyle::new(None, Some(Color::from_rgb8(255, 255, 0))),
        "PLAY",
        Font::DEFAULT_UI,
        true,
        text_action,
    ));

    let mut mouse = Mouse::new();
    mouse.update_state(center, &[true]);
    context.update_state(mouse.position(), mouse.keys(), 1.0 / 70.0);

    assert_eq!(text_clicks.get(), 1);
    assert_eq!(triangle_clicks.get(), 0);
    assert_eq!(context.focused(), Some(text));
    let triangle_button = context.element::<TriangleButton>(triangle).unwrap();
    assert!(!triangle_button.collides_with_mouse());
    assert!(!triangle_button.active());
}

/// Test: outside the text label the triangle behind it is reachable.
#[test]
fn test_back_button_reachable_around_front_button() {
    let center = Vec2::new(640.0, 360.0);
    let (triangle_clicks, triangle_action) = counter();

    let mut context = UiContext::new(2);
    context.back_layer().add_element(TriangleButton::new(
        center,
        Vec2::new(300.0, 300.0),
        idle(),
        hovered(),
        Vec2::new(1.0, 1.0),
        0.0,
        false,
        triangle_action,
    ));
    context.front_layer().add_element(TextButton::new(
        center,
        idle(),
        hovered(),
        "PLAY",
        Font::DEFAULT_UI,
        false,
        || {},
    ));

    // The label is 32 px tall plus a 10 px outline; 100 px below is free.
    context.update_state(center + Vec2::new(0.0, 100.0), &[Key::new(false, true)], 0.0);
    assert_eq!(triangle_clicks.get(), 1);
}

/// Test: sweep the mouse over a pile of overlapping buttons.
#[test]
fn test_focus_exclusivity() {
    let mut context = UiContext::new(3);
    let mut order: Vec<(ElementId, Rect)> = Vec::new();

    // Deterministic overlapping layout, added to layers out of order.
    let mut placements = Vec::new();
    for i in 0..12_u8 {
        let f = f32::from(i);
        let center = Vec2::new(100.0 + (f * 37.0) % 160.0, 100.0 + (f * 53.0) % 140.0);
        let size = Vec2::new(60.0 + f * 5.0, 40.0 + (f * 7.0) % 30.0);
        placements.push((usize::from(i % 3), center, size));
    }
    let mut per_layer: Vec<Vec<(ElementId, Rect)>> = vec![Vec::new(); 3];
    for (layer, center, size) in placements {
        let element = button(center, size, || {});
        let rect = BoxModel::new(center, size, idle()).rectangle_with_outline();
        let id = context.append_element(layer, element);
        per_layer[layer].push((id, rect));
    }
    for layer in per_layer {
        order.extend(layer);
    }

    let mut checked = 0;
    for gx in 0..40 {
        for gy in 0..40 {
            let mouse = Vec2::new(40.0 + gx as f32 * 7.0, 40.0 + gy as f32 * 7.0);
            // A press last frame captures the pointer; release it first.
            context.update_state(mouse, &[Key::default()], 0.0);
            context.update_state(mouse, &[Key::new(false, true)], 0.0);

            let colliding: Vec<ElementId> = order
                .iter()
                .filter(|(id, _)| context.element::<Button>(*id).is_some_and(Button::hovered))
                .map(|(id, _)| *id)
                .collect();
            let active: Vec<ElementId> = order
                .iter()
                .filter(|(id, _)| context.element::<Button>(*id).is_some_and(Button::pressed))
                .map(|(id, _)| *id)
                .collect();
            let expected = order.iter().find(|(_, rect)| rect.contains(mouse)).map(|(id, _)| *id);

            assert!(colliding.len() <= 1, "{} widgets hovered at {mouse:?}", colliding.len());
            assert!(active.len() <= 1, "{} widgets active at {mouse:?}", active.len());
            assert_eq!(colliding.first().copied(), expected);
            assert_eq!(active.first().copied(), expected);
            assert_eq!(context.focused(), expected);
            if expected.is_some() {
                checked += 1;
            }
        }
    }
    assert!(checked > 100, "layout should cover a good part of the grid");
}

/// Test: lower layer index wins regardless of insertion order; within a
/// layer the first inserted wins.
#[test]
fn test_z_order_tie_break() {
    let point = Vec2::new(50.0, 50.0);
    let size = Vec2::new(40.0, 40.0);

    let mut context = UiContext::new(2);
    let back = context.append_element(1, button(point, size, || {}));
    let front = context.append_element(0, button(point, size, || {}));
    context.update_state(point, &[], 0.0);
    assert_eq!(context.focused(), Some(front));
    assert!(!context.element::<Button>(back).unwrap().hovered());

    let mut context = UiContext::new(1);
    let first = context.append_element(0, button(point, size, || {}));
    let second = context.append_element(0, button(point, size, || {}));
    context.update_state(point, &[], 0.0);
    assert_eq!(context.focused(), Some(first));
    assert!(!context.element::<Button>(second).unwrap().hovered());
}

/// Test: one click fires once; holding never fires; pressing elsewhere and
/// sliding over never fires.
#[test]
fn test_button_edge_trigger() {
    let (clicks, action) = counter();
    let mut context = UiContext::new(1);
    context.front_layer().add_element(button(Vec2::new(100.0, 100.0), Vec2::new(50.0, 50.0), action));
    let mut mouse = Mouse::new();

    let mut frame = |context: &mut UiContext, position: Vec2, down: bool| {
        mouse.update_state(position, &[down]);
        context.update_state(mouse.position(), mouse.keys(), 1.0 / 70.0);
    };

    let inside = Vec2::new(100.0, 100.0);
    let outside = Vec2::new(400.0, 400.0);

    frame(&mut context, inside, false);
    frame(&mut context, inside, true);
    for _ in 0..10 {
        frame(&mut context, inside, true);
    }
    frame(&mut context, inside, false);
    assert_eq!(clicks.get(), 1);

    frame(&mut context, outside, true);
    frame(&mut context, inside, true);
    frame(&mut context, inside, false);
    assert_eq!(clicks.get(), 1);

    frame(&mut context, inside, true);
    assert_eq!(clicks.get(), 2);
}

/// Test: only the left button clicks.
#[test]
fn test_right_button_does_not_click() {
    let (clicks, action) = counter();
    let mut context = UiContext::new(1);
    context.front_layer().add_element(button(Vec2::new(100.0, 100.0), Vec2::new(50.0, 50.0), action));

    let mut keys = [Key::default(); MouseButton::COUNT];
    keys[MouseButton::Right.index()] = Key::new(false, true);
    context.update_state(Vec2::new(100.0, 100.0), &keys, 0.0);

    assert_eq!(clicks.get(), 0);
}

/// Test: a dragged slider keeps the pointer even over a front-layer button.
#[test]
fn test_drag_captures_pointer() {
    let value = Reference::new(0.0_f32);
    let (clicks, action) = counter();

    let mut context = UiContext::new(2);
    let front = context.front_layer().add_element(button(Vec2::new(400.0, 100.0), Vec2::new(60.0, 60.0), action));
    let slider = context.back_layer().add_element(
        Slider::free(
            Vec2::new(300.0, 300.0),
            200.0,
            Orientation::Horizontal,
            SliderRange::numeric(0.0, 1.0),
            &value,
        )
        .unwrap(),
    );

    context.update_state(Vec2::new(300.0, 300.0), &[Key::new(false, true)], 0.0);
    assert_eq!(context.captured(), Some(slider));
    assert!((value.get() - 0.5).abs() < 1e-5);

    // Held over the front button: no hover, no click, slider keeps tracking.
    context.update_state(Vec2::new(400.0, 100.0), &[Key::new(true, true)], 0.0);
    assert!(!context.element::<Button>(front).unwrap().hovered());
    assert_eq!(context.focused(), Some(slider));
    assert!((value.get() - 1.0).abs() < 1e-5);

    context.update_state(Vec2::new(400.0, 100.0), &[Key::new(true, false)], 0.0);
    assert_eq!(context.captured(), None);
    assert!(!context.element::<SliderFree>(slider).unwrap().dragging());

    context.update_state(Vec2::new(400.0, 100.0), &[Key::new(false, true)], 0.0);
    assert_eq!(clicks.get(), 1);
}

/// Test: removing the capturing element hands the pointer back.
#[test]
fn test_remove_releases_capture() {
    let value = Reference::new(0.0_f32);
    let mut context = UiContext::new(1);
    let slider = context.front_layer().add_element(
        Slider::free(
            Vec2::new(300.0, 300.0),
            200.0,
            Orientation::Horizontal,
            SliderRange::numeric(0.0, 1.0),
            &value,
        )
        .unwrap(),
    );
    let (clicks, action) = counter();
    context.front_layer().add_element(button(Vec2::new(100.0, 100.0), Vec2::new(40.0, 40.0), action));

    context.update_state(Vec2::new(300.0, 300.0), &[Key::new(false, true)], 0.0);
    assert_eq!(context.captured(), Some(slider));

    assert!(context.remove_element(slider).is_some());
    assert_eq!(context.captured(), None);

    context.update_state(Vec2::new(100.0, 100.0), &[Key::new(false, true)], 0.0);
    assert_eq!(clicks.get(), 1);
}

/// Test: a front-layer checkbox claims the mouse, toggles on the press edge
/// and is drawn last in its own colors.
#[test]
fn test_checkbox_shadows_back_button() {
    let (clicks, action) = counter();
    let mut context = UiContext::new(2);
    let back = context
        .back_layer()
        .add_element(button(Vec2::new(200.0, 200.0), Vec2::new(300.0, 300.0), action));
    let checkbox = context.front_layer().add_element(
        Checkbox::new(Vec2::new(100.0, 100.0), 40.0, 2.0, false, "check1").with_colors(Color::RED, Color::GREEN),
    );

    context.update_state(Vec2::new(120.0, 120.0), &[Key::new(false, true)], 0.0);
    assert_eq!(context.focused(), Some(checkbox));
    assert!(context.element::<Checkbox>(checkbox).unwrap().state());
    assert_eq!(clicks.get(), 0);

    // Holding does not toggle again.
    context.update_state(Vec2::new(120.0, 120.0), &[Key::new(true, true)], 0.0);
    assert!(context.element::<Checkbox>(checkbox).unwrap().state());

    let mut surface = CommandList::new();
    context.draw_elements(&mut surface);
    let commands = surface.commands();
    assert!(commands.iter().any(|command| command.color() == Color::RED));
    assert_eq!(commands.last().map(|command| command.color()), Some(Color::GREEN));

    // Beside the box the button behind it gets the click.
    context.update_state(Vec2::new(200.0, 200.0), &[Key::new(true, false)], 0.0);
    context.update_state(Vec2::new(200.0, 200.0), &[Key::new(false, true)], 0.0);
    assert_eq!(context.focused(), Some(back));
    assert_eq!(clicks.get(), 1);
    assert!(context.element::<Checkbox>(checkbox).unwrap().state());
}

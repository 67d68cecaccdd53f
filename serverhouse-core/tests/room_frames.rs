use serverhouse_core::config::{LED_COLORS, LED_IDLE, RACK_UNITS};
use serverhouse_core::{
    draw_server_rack, BackendKind, DrawCommand, DrawList, FrameParams, RendererOptions, RoomScene,
    RoomType, SurfaceSize,
};

fn led_colors(list: &DrawList) -> Vec<serverhouse_core::Color> {
    list.iter()
        .filter_map(|c| match c {
            DrawCommand::FillCircle { radius, color, .. } if *radius == 2.0 => Some(*color),
            _ => None,
        })
        .collect()
}

#[test]
fn active_server_rack_scenario_has_all_three_led_colors() {
    let mut list = DrawList::new();
    draw_server_rack(&mut list, 20.0, 50.0, 100.0, 200.0, true);

    let colors = led_colors(&list);
    for led in LED_COLORS {
        assert!(colors.contains(&led), "missing LED colour {led}");
    }
}

#[test]
fn every_room_composes_a_frame_in_both_states() {
    let surface = SurfaceSize::new(640.0, 480.0, 1.0);
    for room in RoomType::ALL {
        for is_active in [false, true] {
            let mut scene = RoomScene::new();
            let mut rng = || 0.95;
            let frame = FrameParams {
                room,
                is_active,
                time_secs: 2.0,
                surface,
            };
            let list = scene.compose(&frame, &mut rng);
            let leds = led_colors(list);

            assert!(leds.len() >= RACK_UNITS * 3, "{room}: too few LEDs");
            if is_active {
                assert!(leds.iter().any(|c| *c != LED_IDLE), "{room}: no powered LED");
            } else {
                assert!(leds.iter().all(|c| *c == LED_IDLE), "{room}: powered LED while idle");
            }
        }
    }
}

#[test]
fn options_drive_backend_preference() {
    let opts = RendererOptions::from_json(r#"{"roomType": 0, "isActive": true, "use3D": true}"#)
        .expect("valid options");
    assert!(opts.use_3d);
    assert_eq!(BackendKind::WebGl2.to_string(), "WebGL2");
    assert_eq!(BackendKind::Canvas2d.to_string(), "Canvas2D");
}

//! Shape generation for 2D primitives
//!
//! Everything is top-left anchored screen space (y down), matching the
//! simulation. The car sprite is assembled from rectangles in car-local
//! coordinates and rotated around the body center by the collider heading;
//! the front wheels get an extra steer angle about their own centers.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{colors, Vertex};
use crate::sim::{Car, Category, Collider, GameState};

/// Extra front-wheel angle while a steering flag is held (degrees)
const WHEEL_STEER_ANGLE: f32 = 25.0;
const COIN_SEGMENTS: u32 = 20;

/// Push an axis-aligned rectangle as two triangles.
pub fn push_rect(out: &mut Vec<Vertex>, pos: Vec2, size: Vec2, color: [f32; 4]) {
    let corners = [
        pos,
        pos + Vec2::new(size.x, 0.0),
        pos + size,
        pos + Vec2::new(0.0, size.y),
    ];
    push_quad(out, corners, color);
}

/// Push a rectangle rotated by `rotation_deg` around `pivot`.
pub fn push_rotated_rect(
    out: &mut Vec<Vertex>,
    pos: Vec2,
    size: Vec2,
    pivot: Vec2,
    rotation_deg: f32,
    color: [f32; 4],
) {
    let rad = rotation_deg.to_radians();
    let corners = [
        pos,
        pos + Vec2::new(size.x, 0.0),
        pos + size,
        pos + Vec2::new(0.0, size.y),
    ]
    .map(|p| rotate_about(p, pivot, rad));
    push_quad(out, corners, color);
}

/// Push a filled ellipse (axis-aligned radii).
pub fn push_ellipse(
    out: &mut Vec<Vertex>,
    center: Vec2,
    radius: Vec2,
    color: [f32; 4],
    segments: u32,
) {
    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;
        out.push(Vertex::new(center.x, center.y, color));
        out.push(Vertex::new(
            center.x + radius.x * theta1.cos(),
            center.y + radius.y * theta1.sin(),
            color,
        ));
        out.push(Vertex::new(
            center.x + radius.x * theta2.cos(),
            center.y + radius.y * theta2.sin(),
            color,
        ));
    }
}

fn push_quad(out: &mut Vec<Vertex>, corners: [Vec2; 4], color: [f32; 4]) {
    let [a, b, c, d] = corners;
    for p in [a, b, c, a, c, d] {
        out.push(Vertex::new(p.x, p.y, color));
    }
}

fn rotate_about(p: Vec2, pivot: Vec2, rad: f32) -> Vec2 {
    let d = p - pivot;
    let (sin, cos) = rad.sin_cos();
    pivot + Vec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
}

/// Generate the whole frame: background, registry objects in draw order,
/// vehicles on top.
pub fn scene_vertices(state: &GameState) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(64 + state.registry.len() * 6);

    push_rect(&mut out, Vec2::ZERO, state.bounds, colors::BACKGROUND);

    for entity in state.registry.iter() {
        let body = &entity.collider;
        match entity.category {
            Category::Obstacle => push_rect(
                &mut out,
                body.pos,
                Vec2::new(body.width, body.height),
                colors::OBSTACLE,
            ),
            Category::Collectible => push_coin(&mut out, body, entity.spin),
            Category::Vehicle => {}
        }
    }

    // Vehicles over everything else
    for entity in state.registry.iter() {
        if entity.category == Category::Vehicle {
            if entity.id == state.car.entity {
                push_car(&mut out, &entity.collider, &state.car);
            } else {
                push_rect(
                    &mut out,
                    entity.collider.pos,
                    Vec2::new(entity.collider.width, entity.collider.height),
                    colors::CAR_BODY,
                );
            }
        }
    }

    out
}

/// A coin spins by squashing its horizontal radius with the spin phase.
fn push_coin(out: &mut Vec<Vertex>, body: &Collider, spin: f32) {
    let radius = body.width / 2.0;
    let squash = spin.to_radians().cos().abs().max(0.15);
    push_ellipse(
        out,
        body.center(),
        Vec2::new(radius * squash, radius),
        colors::COIN,
        COIN_SEGMENTS,
    );
}

/// The car sprite: wheels, body, headlights, reverse lights, windows -
/// in that paint order, all rotated around the body center.
pub fn push_car(out: &mut Vec<Vertex>, body: &Collider, car: &Car) {
    let origin = body.pos;
    let pivot = body.center();
    let rot = body.rotation;
    let w = body.width;
    let h = body.height;

    let wheel = Vec2::new(2.0, 8.0);
    let steer = if car.steering_right {
        WHEEL_STEER_ANGLE
    } else if car.steering_left {
        -WHEEL_STEER_ANGLE
    } else {
        0.0
    };

    // Front wheel pair, angled by the last-applied steering input
    for offset in [Vec2::new(-2.0, 10.0), Vec2::new(w, 10.0)] {
        push_steered_wheel(out, origin + offset, wheel, pivot, rot, steer);
    }
    // Rear wheel pair, always straight
    for offset in [Vec2::new(-2.0, 35.0), Vec2::new(w, 35.0)] {
        push_rotated_rect(out, origin + offset, wheel, pivot, rot, colors::WHEEL);
    }

    push_rotated_rect(out, origin, Vec2::new(w, h), pivot, rot, colors::CAR_BODY);

    // Headlights, toed slightly outward
    push_angled_rect(
        out,
        origin + Vec2::new(4.0, 1.0),
        Vec2::new(8.0, 4.0),
        -20.0,
        pivot,
        rot,
        colors::HEADLIGHT,
    );
    push_angled_rect(
        out,
        origin + Vec2::new(w - 12.0, 1.0),
        Vec2::new(8.0, 4.0),
        20.0,
        pivot,
        rot,
        colors::HEADLIGHT,
    );

    // Reverse lights glow while backing up
    let reverse_color = if car.is_reversing() {
        colors::REVERSE_LIGHT
    } else {
        colors::REVERSE_LIGHT_DIM
    };
    for offset in [Vec2::new(3.0, 45.0), Vec2::new(20.0, 45.0)] {
        push_rotated_rect(out, origin + offset, Vec2::new(6.0, 3.0), pivot, rot, reverse_color);
    }

    // Windshield, tint strip, rear window
    push_rotated_rect(
        out,
        origin + Vec2::new(2.0, 15.0),
        Vec2::new(w - 4.0, 8.0),
        pivot,
        rot,
        colors::WINDOW,
    );
    push_rotated_rect(
        out,
        origin + Vec2::new(2.0, 23.0),
        Vec2::new(w - 4.0, 12.0),
        pivot,
        rot,
        colors::WINDOW_TINT,
    );
    push_rotated_rect(
        out,
        origin + Vec2::new(2.0, 35.0),
        Vec2::new(w - 4.0, 6.0),
        pivot,
        rot,
        colors::WINDOW,
    );
}

/// A wheel first turned about its own center, then rotated with the car.
fn push_steered_wheel(
    out: &mut Vec<Vertex>,
    pos: Vec2,
    size: Vec2,
    pivot: Vec2,
    car_rot_deg: f32,
    steer_deg: f32,
) {
    push_angled_rect(out, pos, size, steer_deg, pivot, car_rot_deg, colors::WHEEL);
}

/// Rect rotated about its own center by `local_deg`, then about `pivot`
/// by `pivot_deg`.
fn push_angled_rect(
    out: &mut Vec<Vertex>,
    pos: Vec2,
    size: Vec2,
    local_deg: f32,
    pivot: Vec2,
    pivot_deg: f32,
    color: [f32; 4],
) {
    let local_rad = local_deg.to_radians();
    let pivot_rad = pivot_deg.to_radians();
    let center = pos + size * 0.5;
    let corners = [
        pos,
        pos + Vec2::new(size.x, 0.0),
        pos + size,
        pos + Vec2::new(0.0, size.y),
    ]
    .map(|p| rotate_about(rotate_about(p, center, local_rad), pivot, pivot_rad));
    push_quad(out, corners, color);
}

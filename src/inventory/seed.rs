//! Built-in room classes loaded at startup.

use crate::inventory::room::Room;

fn room(id: &str, class: &str, capacity: i64, facility: &str, price: f64, room_count: i64) -> Room {
    Room {
        id: id.to_string(),
        class: class.to_string(),
        capacity,
        facility: facility.to_string(),
        price,
        room_count,
        available: true,
    }
}

/// The five room classes every fresh process starts with.
pub fn seed_rooms() -> Vec<Room> {
    vec![
        room(
            "1",
            "MegaVip",
            10,
            "Double Bed King size, Free Food, Big Luxury Bathub, Swimming Pool, Gym, Custom Request",
            25_000_000.0,
            10,
        ),
        room(
            "2",
            "Vip",
            20,
            "Double Bed King size, Free Food, Big Luxury Bathub,Custom Request Charged",
            17_000_000.0,
            15,
        ),
        room(
            "3",
            "Golde",
            30,
            "Double Bed King size, Free Food, Medium Luxury Bathub",
            15_000_000.0,
            40,
        ),
        room(
            "4",
            "Silver",
            7,
            "Medium Bed size, Small Luxury Bathub",
            10_000_000.0,
            50,
        ),
        room(
            "5",
            "Bronze",
            4,
            "Medium Bed size, Free Morning Meal",
            2_000_000.0,
            60,
        ),
    ]
}

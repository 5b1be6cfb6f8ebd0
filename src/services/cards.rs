use crate::models::SwipeCard;

const HOUSE_IMAGE: &str = "./house.png";
const DELANCEY_IMAGE: &str =
    "https://www.onthesquarerealestate.com/wp-content/uploads/2019/07/HR-2120-Delancey-St5.jpg";
const JOHNSON_IMAGE: &str = "https://www.johnsonhouse.org/wp-content/uploads/2023/03/5.jpeg";
const HOTEL_IMAGE: &str = "https://cf.bstatic.com/xdata/images/hotel/max1024x768/387502758.jpg?k=288205644da7058f1a625ea9752acecbcb7298854a436d1d7a6430ea1d7e6acd&o=&hp=1";

fn card(
    distance_mi: f64,
    bedrooms: u8,
    bathrooms: f32,
    sqft: u32,
    address: &str,
    cost: u32,
    url: &str,
) -> SwipeCard {
    SwipeCard {
        distance_mi,
        bedrooms,
        bathrooms,
        sqft,
        address: address.to_string(),
        cost,
        url: url.to_string(),
    }
}

/// Cards dealt onto the home deck at the start of every visit
pub fn initial_cards() -> Vec<SwipeCard> {
    vec![
        card(2.2, 4, 3.0, 4280, "412 Spruce Street, 19102, Philadelphia, PA", 1466, HOUSE_IMAGE),
        card(1.8, 3, 2.0, 3200, "2120 Delancey Street, 19103, Philadelphia, PA", 1890, DELANCEY_IMAGE),
        card(3.1, 5, 3.5, 4800, "247 S 3rd Street, 19106, Philadelphia, PA", 2100, JOHNSON_IMAGE),
        card(0.9, 2, 2.0, 1850, "1815 JFK Blvd, 19103, Philadelphia, PA", 1250, HOTEL_IMAGE),
        card(1.5, 3, 2.0, 2100, "1900 Arch Street, 19103, Philadelphia, PA", 1750, HOUSE_IMAGE),
        card(2.8, 4, 3.0, 3800, "315 S 7th Street, 19106, Philadelphia, PA", 1950, JOHNSON_IMAGE),
        card(1.2, 2, 1.5, 1600, "2001 Hamilton Street, 19130, Philadelphia, PA", 1350, HOTEL_IMAGE),
        card(3.5, 5, 4.0, 5200, "219 S 18th Street, 19103, Philadelphia, PA", 2400, DELANCEY_IMAGE),
    ]
}

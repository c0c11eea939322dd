use serde::Serialize;

/// Airport reference record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Airport {
    pub code: &'static str,
    pub name: &'static str,
    pub city: &'static str,
    pub country: &'static str,
}

const fn airport(
    code: &'static str,
    name: &'static str,
    city: &'static str,
    country: &'static str,
) -> Airport {
    Airport { code, name, city, country }
}

pub const AIRPORTS: &[Airport] = &[
    // International
    airport("JFK", "John F. Kennedy International Airport", "New York", "USA"),
    airport("LAX", "Los Angeles International Airport", "Los Angeles", "USA"),
    airport("LHR", "Heathrow Airport", "London", "UK"),
    airport("DXB", "Dubai International Airport", "Dubai", "UAE"),
    airport("SIN", "Singapore Changi Airport", "Singapore", "Singapore"),
    // India
    airport("DEL", "Indira Gandhi International Airport", "Delhi", "India"),
    airport("BOM", "Chhatrapati Shivaji Maharaj International Airport", "Mumbai", "India"),
    airport("BLR", "Kempegowda International Airport", "Bengaluru", "India"),
    airport("HYD", "Rajiv Gandhi International Airport", "Hyderabad", "India"),
    airport("MAA", "Chennai International Airport", "Chennai", "India"),
    airport("CCU", "Netaji Subhas Chandra Bose International Airport", "Kolkata", "India"),
    airport("COK", "Cochin International Airport", "Kochi", "India"),
    airport("PNQ", "Pune Airport", "Pune", "India"),
    airport("AMD", "Sardar Vallabhbhai Patel International Airport", "Ahmedabad", "India"),
    airport("GOI", "Dabolim Airport", "Goa", "India"),
    airport("JAI", "Jaipur International Airport", "Jaipur", "India"),
    airport("IXC", "Chandigarh International Airport", "Chandigarh", "India"),
    airport("LKO", "Chaudhary Charan Singh International Airport", "Lucknow", "India"),
    airport("PAT", "Jay Prakash Narayan International Airport", "Patna", "India"),
    airport("IXR", "Birsa Munda Airport", "Ranchi", "India"),
    // International
    airport("CDG", "Charles de Gaulle Airport", "Paris", "France"),
    airport("FRA", "Frankfurt Airport", "Frankfurt", "Germany"),
    airport("HND", "Tokyo Haneda Airport", "Tokyo", "Japan"),
    airport("SYD", "Sydney Airport", "Sydney", "Australia"),
    airport("IST", "Istanbul Airport", "Istanbul", "Turkey"),
];

/// Codes that make a route domestic when both ends are listed.
pub const DOMESTIC_AIRPORTS: &[&str] = &[
    "DEL", "BOM", "BLR", "HYD", "MAA", "CCU", "COK", "PNQ", "AMD", "GOI", "JAI", "IXC", "LKO",
    "PAT", "IXR",
];

pub fn is_domestic_airport(code: &str) -> bool {
    DOMESTIC_AIRPORTS.contains(&code)
}

pub fn airport_by_code(code: &str) -> Option<&'static Airport> {
    AIRPORTS.iter().find(|a| a.code == code)
}

/// Case-insensitive substring search over code, name, city and country.
pub fn search_airports(query: &str) -> Vec<&'static Airport> {
    let query = query.trim().to_lowercase();
    AIRPORTS
        .iter()
        .filter(|a| {
            [a.code, a.name, a.city, a.country]
                .iter()
                .any(|field| field.to_lowercase().contains(&query))
        })
        .collect()
}

//! Seed data - fixed initial places inserted when the table is empty
//!
//! Greater Toronto Area landmarks, transit stations, parks, and civic
//! buildings. Inserted in one transaction so a half-seeded table can
//! never be observed.

use rusqlite::Connection;
use crate::Result;

/// Literal (address, latitude, longitude) triples loaded on first run
pub const SEED_LOCATIONS: &[(&str, f64, f64)] = &[
    ("Oshawa Centre, Oshawa, ON", 43.8965, -78.8656),
    ("Durham College, Oshawa, ON", 43.9453, -78.8956),
    ("Lakeview Park, Oshawa, ON", 43.8584, -78.8051),
    ("Whitby Civic Recreation Complex, Whitby, ON", 43.8846, -78.9427),
    ("Iroquois Park Sports Centre, Whitby, ON", 43.8669, -78.9447),
    ("Ajax Community Centre, Ajax, ON", 43.8509, -79.0284),
    ("Rotary Park, Ajax, ON", 43.8226, -79.0411),
    ("Ajax GO Station, Ajax, ON", 43.8501, -79.0204),
    ("Pickering Town Centre, Pickering, ON", 43.8353, -79.0892),
    ("Frenchman's Bay Marina, Pickering, ON", 43.8067, -79.0823),
    ("Pickering GO Station, Pickering, ON", 43.8346, -79.0875),
    ("Scarborough Town Centre, Scarborough, ON", 43.7767, -79.2578),
    ("Toronto Zoo, Scarborough, ON", 43.8177, -79.1859),
    ("Centennial College Progress Campus, Scarborough, ON", 43.7841, -79.2263),
    ("Scarborough Bluffs Park, Scarborough, ON", 43.7050, -79.2318),
    ("Guild Park and Gardens, Scarborough, ON", 43.7397, -79.1964),
    ("North York Civic Centre, North York, ON", 43.7695, -79.4123),
    ("Yorkdale Shopping Centre, North York, ON", 43.7250, -79.4521),
    ("Mel Lastman Square, North York, ON", 43.7684, -79.4125),
    ("Downsview Park, North York, ON", 43.7390, -79.4690),
    ("Fairview Mall, North York, ON", 43.7787, -79.3456),
    ("Ontario Science Centre, North York, ON", 43.7162, -79.3380),
    ("Sunnybrook Park, North York, ON", 43.7255, -79.3520),
    ("Toronto Eaton Centre, Toronto, ON", 43.6544, -79.3807),
    ("CN Tower, Toronto, ON", 43.6426, -79.3871),
    ("Rogers Centre, Toronto, ON", 43.6414, -79.3894),
    ("Roy Thomson Hall, Toronto, ON", 43.6465, -79.3854),
    ("Nathan Phillips Square, Toronto, ON", 43.6525, -79.3832),
    ("University of Toronto St. George Campus, Toronto, ON", 43.6629, -79.3957),
    ("St. Lawrence Market, Toronto, ON", 43.6487, -79.3716),
    ("Harbourfront Centre, Toronto, ON", 43.6387, -79.3817),
    ("Exhibition Place, Toronto, ON", 43.6333, -79.4141),
    ("High Park, Toronto, ON", 43.6465, -79.4637),
    ("Trinity Bellwoods Park, Toronto, ON", 43.6469, -79.4134),
    ("Kensington Market, Toronto, ON", 43.6540, -79.4024),
    ("Distillery Historic District, Toronto, ON", 43.6503, -79.3596),
    ("Art Gallery of Ontario, Toronto, ON", 43.6536, -79.3925),
    ("Royal Ontario Museum, Toronto, ON", 43.6677, -79.3948),
    ("Scotiabank Arena, Toronto, ON", 43.6435, -79.3791),
    ("Billy Bishop Toronto City Airport, Toronto, ON", 43.6280, -79.3962),
    ("Liberty Village, Toronto, ON", 43.6382, -79.4209),
    ("Fort York National Historic Site, Toronto, ON", 43.6374, -79.4022),
    ("Bloor-Yorkville, Toronto, ON", 43.6705, -79.3947),
    ("Casa Loma, Toronto, ON", 43.6780, -79.4094),
    ("Evergreen Brick Works, Toronto, ON", 43.6840, -79.3641),
    ("Riverdale Park East, Toronto, ON", 43.6678, -79.3524),
    ("Toronto Islands Ferry Terminal, Toronto, ON", 43.6417, -79.3762),
    ("Woodbine Beach, Toronto, ON", 43.6613, -79.3118),
    ("Leslieville, Toronto, ON", 43.6646, -79.3301),
    ("The Beaches Library, Toronto, ON", 43.6726, -79.2966),
    ("Greektown on the Danforth, Toronto, ON", 43.6775, -79.3520),
    ("Rosedale Park, Toronto, ON", 43.6829, -79.3796),
    ("Chinatown West, Toronto, ON", 43.6514, -79.3997),
    ("Queen's Park, Toronto, ON", 43.6622, -79.3930),
    ("Toronto City Hall, Toronto, ON", 43.6526, -79.3832),
    ("Union Station, Toronto, ON", 43.6453, -79.3807),
    ("Spadina Museum, Toronto, ON", 43.6800, -79.4099),
    ("Evergreen Brick Works Trails, Toronto, ON", 43.6845, -79.3651),
    ("Etobicoke Civic Centre, Etobicoke, ON", 43.6431, -79.5803),
    ("Sherway Gardens, Etobicoke, ON", 43.6108, -79.5572),
    ("Centennial Park Conservatory, Etobicoke, ON", 43.6561, -79.5832),
    ("Humber Bay Park East, Etobicoke, ON", 43.6204, -79.4759),
    ("Kipling GO Station, Etobicoke, ON", 43.6375, -79.5354),
    ("Long Branch Park, Etobicoke, ON", 43.5896, -79.5424),
    ("Mississauga Civic Centre, Mississauga, ON", 43.5890, -79.6441),
    ("Square One Shopping Centre, Mississauga, ON", 43.5934, -79.6427),
    ("Port Credit Lighthouse, Mississauga, ON", 43.5476, -79.5876),
    ("University of Toronto Mississauga, Mississauga, ON", 43.5471, -79.6625),
    ("Lakefront Promenade Park, Mississauga, ON", 43.5654, -79.5628),
    ("Meadowvale Town Centre, Mississauga, ON", 43.5942, -79.7510),
    ("Streetsville Memorial Park, Mississauga, ON", 43.5826, -79.7131),
    ("Erin Mills Town Centre, Mississauga, ON", 43.5618, -79.7487),
    ("Dixie Outlet Mall, Mississauga, ON", 43.5903, -79.5667),
    ("Jack Darling Memorial Park, Mississauga, ON", 43.5205, -79.6277),
    ("Brampton City Hall, Brampton, ON", 43.6845, -79.7595),
    ("Gage Park, Brampton, ON", 43.6833, -79.7590),
    ("Bramalea City Centre, Brampton, ON", 43.7175, -79.7217),
    ("Professor's Lake Recreation Centre, Brampton, ON", 43.7356, -79.7125),
    ("Chinguacousy Park, Brampton, ON", 43.7243, -79.7288),
    ("Eldorado Park, Brampton, ON", 43.6587, -79.8223),
    ("Rose Theatre, Brampton, ON", 43.6841, -79.7606),
    ("Mount Pleasant GO Station, Brampton, ON", 43.7032, -79.8361),
    ("Markham Civic Centre, Markham, ON", 43.8565, -79.3370),
    ("Markville Shopping Centre, Markham, ON", 43.8663, -79.2824),
    ("Unionville Main Street, Markham, ON", 43.8694, -79.3098),
    ("Milne Dam Conservation Park, Markham, ON", 43.8512, -79.2577),
    ("Pacific Mall, Markham, ON", 43.8273, -79.3023),
    ("Angus Glen Golf Club, Markham, ON", 43.9000, -79.3275),
    ("Cornell Community Centre, Markham, ON", 43.8775, -79.2307),
    ("Richmond Green Sports Centre, Richmond Hill, ON", 43.9184, -79.4055),
    ("Hillcrest Mall, Richmond Hill, ON", 43.8623, -79.4328),
    ("David Dunlap Observatory Park, Richmond Hill, ON", 43.8580, -79.4184),
    ("Richmond Hill Centre, Richmond Hill, ON", 43.8404, -79.4204),
    ("Aurora Cultural Centre, Aurora, ON", 44.0062, -79.4509),
    ("Aurora Town Park, Aurora, ON", 44.0061, -79.4501),
    ("Newmarket Riverwalk Commons, Newmarket, ON", 44.0545, -79.4542),
    ("Upper Canada Mall, Newmarket, ON", 44.0506, -79.4636),
    ("Vaughan City Hall, Vaughan, ON", 43.8375, -79.5281),
    ("Canada's Wonderland, Vaughan, ON", 43.8430, -79.5410),
    ("Vaughan Mills, Vaughan, ON", 43.8256, -79.5390),
    ("Kortright Centre for Conservation, Vaughan, ON", 43.8531, -79.5955),
    ("Woodbridge Memorial Tower, Vaughan, ON", 43.7885, -79.5952),
    ("Maple Community Centre, Vaughan, ON", 43.8560, -79.5289),
    ("Bolton Arena, Caledon, ON", 43.8801, -79.7359),
    ("Caledon Centre for Recreation, Caledon, ON", 43.8736, -79.7643),
    ("King City Arena, King City, ON", 43.9291, -79.5287),
    ("Stouffville GO Station, Whitchurch-Stouffville, ON", 43.9706, -79.2451),
    ("Brooklin Community Centre, Whitby, ON", 43.9639, -78.9457),
    ("Uxbridge Arena, Uxbridge, ON", 44.1029, -79.1272),
    ("Georgina Ice Palace, Georgina, ON", 44.2402, -79.4554),
    ("Pefferlaw Lions Community Hall, Georgina, ON", 44.3174, -79.1980),
    ("Lake Wilcox Park, Richmond Hill, ON", 43.9553, -79.4369),
    ("Aurora GO Station, Aurora, ON", 44.0059, -79.4502),
    ("Oshawa GO Station, Oshawa, ON", 43.8975, -78.8659),
    ("Whitby GO Station, Whitby, ON", 43.8572, -78.9433),
];

/// Insert the seed rows if the table is empty.
///
/// Runs inside a single transaction; either all seed rows persist or
/// none do. Returns the number of rows inserted (0 when the table
/// already had data).
pub fn seed_if_empty(conn: &mut Connection) -> Result<usize> {
    let existing: i64 = conn.query_row("SELECT COUNT(*) FROM locations", [], |row| row.get(0))?;
    if existing > 0 {
        return Ok(0);
    }

    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO locations (address, latitude, longitude) VALUES (?1, ?2, ?3)",
        )?;
        for (address, latitude, longitude) in SEED_LOCATIONS {
            stmt.execute(rusqlite::params![address, latitude, longitude])?;
        }
    }
    tx.commit()?;

    tracing::debug!("Seeded {} locations", SEED_LOCATIONS.len());
    Ok(SEED_LOCATIONS.len())
}

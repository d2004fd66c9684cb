//! The stock board: ten sets, the Trailer, the Casting Office and a deck
//! of forty scene cards, enough for a four-day game.

use super::{BoardDefinition, UpgradeTable};
use crate::board::{Location, Take};
use crate::cards::{Area, Role, SceneCard};
use crate::core::{CASTING_OFFICE, TRAILER};

/// (name, rank, line)
type RoleRow = (&'static str, u8, &'static str);

struct SetRow {
    name: &'static str,
    neighbors: &'static [&'static str],
    area: (u32, u32),
    takes: u8,
    roles: &'static [RoleRow],
}

struct CardRow {
    image: &'static str,
    title: &'static str,
    budget: u8,
    description: &'static str,
    roles: &'static [RoleRow],
}

const SETS: &[SetRow] = &[
    SetRow {
        name: "Train Station",
        neighbors: &["Jail", "General Store", CASTING_OFFICE],
        area: (21, 69),
        takes: 3,
        roles: &[
            ("Crusty Prospector", 1, "Aww, peaches!"),
            ("Dragged by Train", 1, "Omgeezers!"),
            ("Preacher with Bag", 2, "The Lord will provide."),
            ("Cyrus the Gunfighter", 4, "Git to fightin' or git away!"),
        ],
    },
    SetRow {
        name: "Secret Hideout",
        neighbors: &["Church", "Ranch", CASTING_OFFICE],
        area: (27, 732),
        takes: 3,
        roles: &[
            ("Clumsy Pit Fighter", 1, "Hit me!"),
            ("Thug with Knife", 2, "Meet Suzy, my murderin' knife."),
            ("Dangerous Tom", 3, "There's two ways we can do this..."),
            ("Penny, who is Lost", 4, "Oh, woe! For I am lost!"),
        ],
    },
    SetRow {
        name: "Church",
        neighbors: &["Hotel", "Bank", "Secret Hideout"],
        area: (623, 734),
        takes: 2,
        roles: &[("Dead Man", 1, "....."), ("Crying Woman", 2, "Oh, the humanity!")],
    },
    SetRow {
        name: "Hotel",
        neighbors: &[TRAILER, "Bank", "Church"],
        area: (969, 740),
        takes: 3,
        roles: &[
            ("Sleeping Drunkard", 1, "Zzzzzzz... Whiskey!"),
            ("Faro Player", 1, "Hit me!"),
            ("Falls from Balcony", 2, "Arrrgghh!!"),
            ("Australian Bartender", 3, "What'll it be, mate?"),
        ],
    },
    SetRow {
        name: "Main Street",
        neighbors: &[TRAILER, "Saloon", "Jail"],
        area: (969, 28),
        takes: 3,
        roles: &[
            ("Railroad Worker", 1, "I'm a steel-drivin' man!"),
            ("Falls off Roof", 2, "Aaaaiiiigggghh!"),
            ("Woman in Black Dress", 2, "Well, I'll be!"),
            ("Mayor McGinty", 4, "People of Deadwood!"),
        ],
    },
    SetRow {
        name: "Jail",
        neighbors: &["Main Street", "General Store", "Train Station"],
        area: (281, 27),
        takes: 1,
        roles: &[
            ("Prisoner in Cell", 2, "Zzzzzzz... Whiskey!"),
            ("Feller in Irons", 3, "Ah kilt the wrong man!"),
        ],
    },
    SetRow {
        name: "General Store",
        neighbors: &["Jail", "Saloon", "Train Station", "Ranch"],
        area: (370, 282),
        takes: 2,
        roles: &[
            ("Man in Overalls", 1, "Looks like a storm's comin' in."),
            ("Mister Keach", 3, "Howdy, stranger."),
        ],
    },
    SetRow {
        name: "Ranch",
        neighbors: &["General Store", "Bank", CASTING_OFFICE, "Secret Hideout"],
        area: (252, 478),
        takes: 2,
        roles: &[
            ("Shot in Leg", 1, "Ow! Me leg!"),
            ("Saucy Fred", 2, "That's what she said."),
            ("Man Under Horse", 3, "A little help here!"),
        ],
    },
    SetRow {
        name: "Bank",
        neighbors: &["Saloon", "Hotel", "Church", "Ranch"],
        area: (623, 475),
        takes: 1,
        roles: &[
            ("Suspicious Gentleman", 2, "Can you be more specific?"),
            ("Flustered Teller", 3, "Would you like a large bill, sir?"),
        ],
    },
    SetRow {
        name: "Saloon",
        neighbors: &["Main Street", TRAILER, "General Store", "Bank"],
        area: (632, 280),
        takes: 2,
        roles: &[
            ("Reluctant Farmer", 1, "I ain't so sure about that!"),
            ("Woman in Red Dress", 2, "Come up and see me!"),
        ],
    },
];

const CARDS: &[CardRow] = &[
    CardRow { image: "01.png", title: "Law and the Old West", budget: 2, description: "Rancher Carl faces down a land baron over a busted fence.", roles: &[("Rancher Carl", 1, "Git off my land!"), ("Land Baron", 2, "Everything here is mine.")] },
    CardRow { image: "02.png", title: "Evil Wears a Hat", budget: 4, description: "Calvin and his brothers ride into town looking for trouble.", roles: &[("Calvin Brother", 2, "Where's the sheriff?"), ("Hat Seller", 3, "Finest felt in the territory."), ("Tommy the Kid", 4, "I ain't no kid!")] },
    CardRow { image: "03.png", title: "The Life and Death of Pecos Pete", budget: 5, description: "Pecos Pete's final hours, told in flashback.", roles: &[("Pecos Pete", 4, "Tell Ma I'm sorry."), ("Undertaker", 2, "Measure twice, bury once."), ("Pete's Mother", 5, "My baby boy!")] },
    CardRow { image: "04.png", title: "The Way the West Was Run", budget: 4, description: "A stampede threatens the new railroad spur.", roles: &[("Trail Boss", 3, "Head 'em off at the pass!"), ("Cattle Rustler", 2, "Nobody'll miss a few head.")] },
    CardRow { image: "05.png", title: "Davy Crockett: A Drunkard's Tale", budget: 4, description: "A frontier hero's lesser-known weekend.", roles: &[("Davy Crockett", 4, "Where's my hat?"), ("Bartender", 2, "You've had enough, Davy."), ("Drunk Bear", 1, "Rrrrowr... hic.")] },
    CardRow { image: "06.png", title: "Czechs in the Sonora", budget: 4, description: "Immigrant miners strike an unlikely claim.", roles: &[("Miner Jan", 1, "Gold! Finally!"), ("Claim Jumper", 3, "That's my stake, friend."), ("Desert Guide", 4, "Water's three days that way.")] },
    CardRow { image: "07.png", title: "Ol' Shooter and Little Doll", budget: 4, description: "An old gunfighter takes in an orphan girl.", roles: &[("Ol' Shooter", 4, "I'm too old for this."), ("Little Doll", 1, "Can I keep him?"), ("Orphanage Matron", 2, "Rules are rules.")] },
    CardRow { image: "08.png", title: "How They Get Milk", budget: 2, description: "An educational short about dairy farming.", roles: &[("Dairy Farmer", 1, "Easy now, Bessie."), ("Narrator", 2, "And that, children, is milk.")] },
    CardRow { image: "09.png", title: "Go West, You!", budget: 3, description: "A family crosses the plains in search of a new life.", roles: &[("Wagon Master", 2, "Circle the wagons!"), ("Homesick Son", 1, "Are we there yet?")] },
    CardRow { image: "10.png", title: "Trials of the First Mule", budget: 3, description: "A mule learns to carry a heavy load.", roles: &[("The Mule", 1, "Hee-haw."), ("Mule Skinner", 3, "Move, you stubborn beast!")] },
    CardRow { image: "11.png", title: "Breakin' in Trick Ponies", budget: 3, description: "A traveling show trains new talent.", roles: &[("Trick Rider", 2, "Look, no hands!"), ("Ringmaster", 3, "Ladies and gentlemen!"), ("Clown", 1, "Honk honk.")] },
    CardRow { image: "12.png", title: "The Robbers of Trains", budget: 5, description: "A daring holdup on the midnight express.", roles: &[("Masked Bandit", 3, "Hands where I can see 'em!"), ("Conductor", 2, "Tickets, please."), ("Express Agent", 5, "You'll never open that safe.")] },
    CardRow { image: "13.png", title: "Thirteen the Hard Way", budget: 6, description: "A high-stakes poker game goes very wrong.", roles: &[("Card Sharp", 4, "Read 'em and weep."), ("Saloon Owner", 5, "House always wins."), ("Marshal Hayes", 6, "Nobody leaves this table.")] },
    CardRow { image: "14.png", title: "Square Deal City", budget: 6, description: "A reformer runs for mayor of a crooked town.", roles: &[("Reformer Smith", 5, "A square deal for all!"), ("Crooked Alderman", 3, "How much for your vote?"), ("Ballot Box Stuffer", 2, "Just one more...")] },
    CardRow { image: "15.png", title: "Jesse James: Man of Action", budget: 5, description: "The outlaw's most daring escape.", roles: &[("Jesse James", 5, "Catch me if you can!"), ("Frank James", 4, "Wait for me, Jesse!"), ("Pinkerton Man", 2, "We'll get him next time.")] },
    CardRow { image: "16.png", title: "A Man Called \"Cow\"", budget: 3, description: "Nobody knows why they call him that.", roles: &[("Cow", 2, "Moo."), ("Confused Sheriff", 3, "Why do they call you Cow?")] },
    CardRow { image: "17.png", title: "Taffy Commercial", budget: 2, description: "Sweet, chewy, and good for the teeth.", roles: &[("Taffy Puller", 1, "Stretch it out!"), ("Happy Child", 1, "Mmm, taffy!")] },
    CardRow { image: "18.png", title: "Gum Drop Stagecoach", budget: 2, description: "A confectioner's delivery across hostile country.", roles: &[("Stagecoach Driver", 2, "Hyah!"), ("Candy Maker", 1, "Careful with the gum drops!")] },
    CardRow { image: "19.png", title: "The Search for Maggie White", budget: 6, description: "A posse hunts for a missing schoolteacher.", roles: &[("Maggie White", 6, "I knew you'd come."), ("Posse Leader", 4, "Saddle up, boys."), ("Tracker", 3, "Trail goes cold here.")] },
    CardRow { image: "20.png", title: "Buffalo Bill: The Lost Years", budget: 4, description: "What the showman did between tours.", roles: &[("Buffalo Bill", 4, "I've lost my buffalo."), ("Lost Buffalo", 1, "Snort.")] },
    CardRow { image: "21.png", title: "Swing 'em Wide", budget: 5, description: "A cattle drive goes through a dust storm.", roles: &[("Wrangler", 3, "Keep 'em moving!"), ("Cook", 2, "Beans again, boys."), ("Night Rider", 4, "Something's out there.")] },
    CardRow { image: "22.png", title: "My Years on the Prairie", budget: 4, description: "A homesteader's memoir of hardship and grit.", roles: &[("Homesteader", 3, "This land will provide."), ("Prairie Wife", 2, "The well's dry again.")] },
    CardRow { image: "23.png", title: "The Pinkerton Question", budget: 5, description: "A detective hunts a spy in the mining camp.", roles: &[("Detective Lane", 5, "The evidence speaks."), ("Foreman", 3, "My men are loyal."), ("Nervous Clerk", 1, "I didn't see nothin'!")] },
    CardRow { image: "24.png", title: "Hangman's Noose", budget: 5, description: "An innocent man awaits the gallows.", roles: &[("Condemned Man", 4, "I'm innocent, I tell you!"), ("Hangman", 3, "Any last words?"), ("Weeping Sweetheart", 2, "Not my Johnny!")] },
    CardRow { image: "25.png", title: "One False Step for Mankind", budget: 6, description: "A balloonist attempts to cross the Rockies.", roles: &[("Balloonist", 6, "Up, up and away!"), ("Skeptical Reporter", 2, "It'll never fly.")] },
    CardRow { image: "26.png", title: "The Mayor's Daughter", budget: 3, description: "A courtship complicated by politics.", roles: &[("Mayor's Daughter", 2, "Father must never know."), ("Penniless Suitor", 1, "I have only my love.")] },
    CardRow { image: "27.png", title: "Crazy Jake's Big Score", budget: 4, description: "A prospector insists he's found the mother lode.", roles: &[("Crazy Jake", 3, "It's real this time!"), ("Assay Officer", 4, "That's pyrite, Jake.")] },
    CardRow { image: "28.png", title: "Shakespeare in Lubbock", budget: 3, description: "A touring company performs Hamlet for cowboys.", roles: &[("Hamlet", 3, "To be, or not to be."), ("Heckling Cowboy", 1, "Get on with it!"), ("Ophelia", 2, "My lord!")] },
    CardRow { image: "29.png", title: "Beyond the Pail", budget: 2, description: "A milkmaid's quiet rebellion.", roles: &[("Milkmaid", 1, "I'm done with cows."), ("Stern Father", 2, "You'll milk and like it.")] },
    CardRow { image: "30.png", title: "Disaster at Flying J", budget: 5, description: "A ranch fire tests a family's resolve.", roles: &[("Ranch Hand", 2, "Fire in the barn!"), ("Rancher's Widow", 5, "We rebuild."), ("Volunteer Fireman", 3, "More buckets!")] },
    CardRow { image: "31.png", title: "Uncle Ira's Revenge", budget: 4, description: "A long-dead uncle's will causes chaos.", roles: &[("Lawyer Pettigrew", 3, "The will is quite clear."), ("Greedy Nephew", 2, "It should all be mine!"), ("Uncle Ira's Ghost", 4, "Boo.")] },
    CardRow { image: "32.png", title: "The Gambler's Last Hand", budget: 5, description: "A riverboat gambler bets everything.", roles: &[("Riverboat Gambler", 5, "All in."), ("Dealer", 2, "Cards, gentlemen?")] },
    CardRow { image: "33.png", title: "Trouble in Tumbleweed", budget: 3, description: "Tumbleweeds invade a small town.", roles: &[("Town Crier", 1, "The weeds are coming!"), ("Broom Salesman", 2, "Brooms! Get your brooms!")] },
    CardRow { image: "34.png", title: "The Sheriff's Last Stand", budget: 6, description: "An aging lawman faces the gang that killed his partner.", roles: &[("Sheriff Boone", 6, "This ends today."), ("Deputy Mills", 3, "I've got your back."), ("Gang Leader", 5, "You're outnumbered, old man.")] },
    CardRow { image: "35.png", title: "Ghost Town Jamboree", budget: 2, description: "A square dance in an abandoned town.", roles: &[("Fiddler", 1, "Swing your partner!"), ("Caller", 2, "Do-si-do!")] },
    CardRow { image: "36.png", title: "Rattlesnake Gulch", budget: 4, description: "Settlers discover why nobody lives here.", roles: &[("Snake Oil Man", 2, "Cures what ails ya!"), ("Bitten Settler", 1, "Ow! Ow! Ow!"), ("Doc Holloway", 4, "Hold still, son.")] },
    CardRow { image: "37.png", title: "Silver Spur Saloon", budget: 3, description: "A new dance hall opens its doors.", roles: &[("Dance Hall Girl", 2, "Care to dance, cowboy?"), ("Piano Player", 1, "Requests?")] },
    CardRow { image: "38.png", title: "Dead Man's Hand", budget: 5, description: "Aces and eights, and a shot in the back.", roles: &[("Wild Bill", 5, "Aces and eights."), ("Jack McCall", 3, "This one's for my brother.")] },
    CardRow { image: "39.png", title: "The Iron Horse", budget: 4, description: "The first locomotive arrives in town.", roles: &[("Engineer", 3, "All aboard!"), ("Frightened Horse", 1, "Neeeigh!"), ("Railroad Tycoon", 4, "Progress, gentlemen!")] },
    CardRow { image: "40.png", title: "Sunset Over Deadwood", budget: 6, description: "The town's final curtain call.", roles: &[("Old Timer", 4, "I remember when this was all prairie."), ("Young Drifter", 2, "Where to next?"), ("Town Founder", 6, "It was a good town.")] },
];

fn role(row: &RoleRow, on_card: bool) -> Role {
    let (name, rank, line) = *row;
    if on_card {
        Role::on_card(name, rank, line)
    } else {
        Role::off_card(name, rank, line)
    }
}

fn set_location(row: &SetRow) -> Location {
    let (x, y) = row.area;
    let mut location = Location::new(row.name, row.neighbors.iter().copied(), Area::new(x, y, 115, 205));
    for number in 1..=row.takes {
        let offset = 55 * u32::from(number - 1);
        location = location.with_take(Take::new(number, Area::new(x + 200 - offset, y + 2, 47, 47)));
    }
    for (i, r) in row.roles.iter().enumerate() {
        let area = Area::new(x + 230 + 60 * i as u32, y + 30, 46, 46);
        location = location.with_role(role(r, false).with_area(area));
    }
    location
}

fn scene_card(row: &CardRow) -> SceneCard {
    let mut card = SceneCard::new(row.image, row.title, row.budget).with_description(row.description);
    for (i, r) in row.roles.iter().enumerate() {
        card = card.with_role(role(r, true).with_area(Area::new(20 + 63 * i as u32, 47, 40, 40)));
    }
    card
}

/// The stock board with the standard upgrade prices.
#[must_use]
pub fn standard_board() -> BoardDefinition {
    let mut locations = vec![
        Location::new(TRAILER, ["Main Street", "Saloon", "Hotel"], Area::new(991, 248, 194, 201)),
        Location::new(
            CASTING_OFFICE,
            ["Train Station", "Ranch", "Secret Hideout"],
            Area::new(9, 459, 208, 209),
        ),
    ];
    locations.extend(SETS.iter().map(set_location));

    BoardDefinition {
        locations,
        cards: CARDS.iter().map(scene_card).collect(),
        upgrades: UpgradeTable::standard(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_takes_and_roles() {
        let board = standard_board();
        let jail = board.locations.iter().find(|l| l.name == "Jail").unwrap();

        assert_eq!(jail.takes().len(), 1);
        assert_eq!(jail.location_roles().len(), 2);
        assert!(jail.location_roles().iter().all(|r| !r.on_card));
    }

    #[test]
    fn test_cards_have_roles() {
        let board = standard_board();

        for card in &board.cards {
            assert!(!card.roles.is_empty(), "{} has no roles", card.id);
            assert!(card.roles.iter().all(|r| r.on_card && r.rank <= card.budget));
        }
    }

    #[test]
    fn test_rank_one_roles_from_trailer() {
        // Every neighbor of the Trailer has a rank-1 location role
        let board = standard_board();
        let trailer = board.locations.iter().find(|l| l.name == TRAILER).unwrap();

        for name in &trailer.neighbors {
            let loc = board.locations.iter().find(|l| &l.name == name).unwrap();
            assert!(loc.location_roles().iter().any(|r| r.rank == 1), "{}", name);
        }
    }
}

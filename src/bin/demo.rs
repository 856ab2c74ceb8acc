//! Console demo: runs a handful of sample credentials through the policy
//! pipeline and prints each verdict.

use pwd_policy::{default_denylist, validate};
use secrecy::SecretString;

fn main() {
    let denylist = default_denylist();

    let samples = [
        ("jimena", "Password123!"),
        ("ana", "ana12345"),
        ("pepito", "weak"),
        ("user", "Password"),
        ("maria", "qwerty123!"),
    ];

    for (username, candidate) in samples {
        let password = SecretString::new(candidate.to_string().into());
        let result = validate(username, &password, &denylist);

        match result.error() {
            Some(reason) => println!("{username} / {candidate} -> rejected: {reason}"),
            None => println!("{username} / {candidate} -> accepted"),
        }
    }
}

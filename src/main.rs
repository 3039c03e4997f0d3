use brim::prelude::*;

fn main() {
    fill_unit!();
}

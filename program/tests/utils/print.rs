#![cfg(test)]
use dexcore_api::prelude::InstructionType;
use steel::*;
use pretty_hex::*;

pub fn print_ix(ix: &Instruction) {
    println!("\n");
    println!("--------------------------------------------------------------------------------");

    let ix_type = InstructionType::try_from(ix.data[0]).unwrap();

    println!("ix:\t{:?} ({})", ix_type, ix.data[0]);
    println!("len:\t{:?}", ix.data.len());
    println!("accounts:");

    for (i, meta) in ix.accounts.iter().enumerate() {
        println!("\t{}: {:?} (signer: {}, writable: {})", i, meta.pubkey, meta.is_signer, meta.is_writable);
    }

    println!("\ndata:\n\t{:?}", ix.data);
    println!("\n\n{}\n", pretty_hex(&ix.data));
}

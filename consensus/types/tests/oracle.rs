//! Rebuilds encodings and roots straight from the layout rules and compares them with what the
//! derived implementations produce.

use ethereum_hashing::hash;
use quickcheck_macros::quickcheck;
use rand::{RngCore, SeedableRng};
use rand_xorshift::XorShiftRng;
use ssz::{encode_flat_list, Decode, DecodeError, Encode};
use tree_hash::TreeHash;
use types::*;

type E = MainnetEthSpec;

type Chunk = [u8; 32];

/// Splits `bytes` into zero-padded 32 byte chunks.
fn pack(bytes: &[u8]) -> Vec<Chunk> {
    bytes
        .chunks(32)
        .map(|c| {
            let mut chunk = [0; 32];
            chunk[..c.len()].copy_from_slice(c);
            chunk
        })
        .collect()
}

/// Pads `chunks` with zero chunks to the next power of two of `max(chunks.len(), limit)` and
/// hashes pairs until one chunk is left.
fn naive_root(mut chunks: Vec<Chunk>, limit: usize) -> Chunk {
    let width = std::cmp::max(chunks.len(), limit).next_power_of_two();
    chunks.resize(width, [0; 32]);

    while chunks.len() > 1 {
        chunks = chunks
            .chunks(2)
            .map(|pair| {
                let mut out = [0; 32];
                out.copy_from_slice(&hash(&[pair[0], pair[1]].concat()));
                out
            })
            .collect();
    }

    chunks[0]
}

/// Same result as `naive_root`, but only builds the populated part of the tree and climbs the rest
/// with zero subtrees, so limits like 2^25 chunks stay cheap.
fn sparse_root(chunks: Vec<Chunk>, limit: usize) -> Chunk {
    let mut width = std::cmp::max(chunks.len(), 1).next_power_of_two();
    let mut root = naive_root(chunks, width);
    let mut zero = naive_root(vec![], width);

    while width < limit.next_power_of_two() {
        root = hash_pair(root, zero);
        zero = hash_pair(zero, zero);
        width *= 2;
    }

    root
}

fn hash_pair(left: Chunk, right: Chunk) -> Chunk {
    let mut out = [0; 32];
    out.copy_from_slice(&hash(&[left, right].concat()));
    out
}

fn mix_in(root: Chunk, len: usize) -> Chunk {
    let mut out = [0; 32];
    out.copy_from_slice(&hash(&[root, pack(&(len as u64).to_le_bytes())[0]].concat()));
    out
}

fn bytes_root(bytes: &[u8]) -> Chunk {
    naive_root(pack(bytes), 0)
}

fn u64_chunk(value: u64) -> Chunk {
    pack(&value.to_le_bytes())[0]
}

fn random_bytes<const N: usize>(rng: &mut XorShiftRng) -> [u8; N] {
    let mut bytes = [0; N];
    rng.fill_bytes(&mut bytes);
    bytes
}

fn deposit(rng: &mut XorShiftRng) -> Deposit {
    Deposit {
        pubkey: PublicKeyBytes::from(random_bytes::<48>(rng)),
        withdrawal_credentials: Hash256::from(random_bytes::<32>(rng)),
        amount: rng.next_u64(),
        signature: SignatureBytes::from(random_bytes::<96>(rng)),
        index: rng.next_u64(),
    }
}

fn withdrawal_request(rng: &mut XorShiftRng) -> WithdrawalRequest {
    WithdrawalRequest {
        source_address: Address::from(random_bytes::<20>(rng)),
        validator_pubkey: PublicKeyBytes::from(random_bytes::<48>(rng)),
        amount: rng.next_u64(),
    }
}

fn consolidation_request(rng: &mut XorShiftRng) -> ConsolidationRequest {
    ConsolidationRequest {
        source_address: Address::from(random_bytes::<20>(rng)),
        source_pubkey: PublicKeyBytes::from(random_bytes::<48>(rng)),
        target_pubkey: PublicKeyBytes::from(random_bytes::<48>(rng)),
    }
}

fn deposit_bytes(d: &Deposit) -> Vec<u8> {
    [
        d.pubkey.as_slice(),
        d.withdrawal_credentials.as_slice(),
        &d.amount.to_le_bytes()[..],
        d.signature.as_slice(),
        &d.index.to_le_bytes()[..],
    ]
    .concat()
}

fn deposit_root(d: &Deposit) -> Chunk {
    naive_root(
        vec![
            bytes_root(d.pubkey.as_slice()),
            d.withdrawal_credentials.0,
            u64_chunk(d.amount),
            bytes_root(d.signature.as_slice()),
            u64_chunk(d.index),
        ],
        0,
    )
}

fn withdrawal_request_bytes(w: &WithdrawalRequest) -> Vec<u8> {
    [
        w.source_address.as_slice(),
        w.validator_pubkey.as_slice(),
        &w.amount.to_le_bytes()[..],
    ]
    .concat()
}

fn withdrawal_request_root(w: &WithdrawalRequest) -> Chunk {
    naive_root(
        vec![
            pack(w.source_address.as_slice())[0],
            bytes_root(w.validator_pubkey.as_slice()),
            u64_chunk(w.amount),
        ],
        0,
    )
}

fn consolidation_request_bytes(c: &ConsolidationRequest) -> Vec<u8> {
    [
        c.source_address.as_slice(),
        c.source_pubkey.as_slice(),
        c.target_pubkey.as_slice(),
    ]
    .concat()
}

fn consolidation_request_root(c: &ConsolidationRequest) -> Chunk {
    naive_root(
        vec![
            pack(c.source_address.as_slice())[0],
            bytes_root(c.source_pubkey.as_slice()),
            bytes_root(c.target_pubkey.as_slice()),
        ],
        0,
    )
}

/// Builds requests with item counts derived from `counts`, all within the mainnet bounds.
fn execution_requests(seed: u64, counts: (u8, u8, u8)) -> ExecutionRequests<E> {
    let mut rng = XorShiftRng::seed_from_u64(seed);
    let deposits = (0..counts.0 % 8).map(|_| deposit(&mut rng)).collect::<Vec<_>>();
    let withdrawals = (0..counts.1 % 17)
        .map(|_| withdrawal_request(&mut rng))
        .collect::<Vec<_>>();
    let consolidations = (0..counts.2 % 3)
        .map(|_| consolidation_request(&mut rng))
        .collect::<Vec<_>>();

    ExecutionRequests {
        deposits: VariableList::new(deposits).unwrap(),
        withdrawals: VariableList::new(withdrawals).unwrap(),
        consolidations: VariableList::new(consolidations).unwrap(),
    }
}

#[quickcheck]
fn fork_matches_oracle(previous_version: u32, current_version: u32, epoch: u64) -> bool {
    let fork = Fork {
        previous_version: previous_version.to_le_bytes(),
        current_version: current_version.to_le_bytes(),
        epoch: Epoch::new(epoch),
    };

    let bytes = [
        &previous_version.to_le_bytes()[..],
        &current_version.to_le_bytes()[..],
        &epoch.to_le_bytes()[..],
    ]
    .concat();
    let root = naive_root(
        vec![
            pack(&previous_version.to_le_bytes())[0],
            pack(&current_version.to_le_bytes())[0],
            u64_chunk(epoch),
        ],
        0,
    );

    fork.as_ssz_bytes() == bytes
        && Fork::from_ssz_bytes(&bytes) == Ok(fork.clone())
        && fork.tree_hash_root().0 == root
}

#[quickcheck]
fn attestation_data_matches_oracle(slot: u64, index: u64, seed: u64) -> bool {
    let mut rng = XorShiftRng::seed_from_u64(seed);
    let beacon_block_root = random_bytes::<32>(&mut rng);
    let data = AttestationData {
        slot: Slot::new(slot),
        index,
        beacon_block_root: Hash256::from(beacon_block_root),
    };

    let bytes = [
        &slot.to_le_bytes()[..],
        &index.to_le_bytes()[..],
        &beacon_block_root[..],
    ]
    .concat();
    let root = naive_root(
        vec![u64_chunk(slot), u64_chunk(index), beacon_block_root],
        0,
    );

    data.as_ssz_bytes() == bytes && data.tree_hash_root().0 == root
}

#[quickcheck]
fn records_match_oracle(seed: u64) -> bool {
    let mut rng = XorShiftRng::seed_from_u64(seed);
    let d = deposit(&mut rng);
    let w = withdrawal_request(&mut rng);
    let c = consolidation_request(&mut rng);

    d.as_ssz_bytes() == deposit_bytes(&d)
        && d.tree_hash_root().0 == deposit_root(&d)
        && Deposit::from_ssz_bytes(&deposit_bytes(&d)) == Ok(d.clone())
        && w.as_ssz_bytes() == withdrawal_request_bytes(&w)
        && w.tree_hash_root().0 == withdrawal_request_root(&w)
        && c.as_ssz_bytes() == consolidation_request_bytes(&c)
        && c.tree_hash_root().0 == consolidation_request_root(&c)
}

#[quickcheck]
fn execution_requests_match_oracle(seed: u64, counts: (u8, u8, u8)) -> bool {
    let requests = execution_requests(seed, counts);

    // Three offsets, then the contents of each list in order.
    let deposits = requests
        .deposits
        .iter()
        .flat_map(deposit_bytes)
        .collect::<Vec<_>>();
    let withdrawals = requests
        .withdrawals
        .iter()
        .flat_map(withdrawal_request_bytes)
        .collect::<Vec<_>>();
    let consolidations = requests
        .consolidations
        .iter()
        .flat_map(consolidation_request_bytes)
        .collect::<Vec<_>>();
    let first = 12_u32;
    let second = first + deposits.len() as u32;
    let third = second + withdrawals.len() as u32;
    let bytes = [
        &first.to_le_bytes()[..],
        &second.to_le_bytes()[..],
        &third.to_le_bytes()[..],
        &deposits[..],
        &withdrawals[..],
        &consolidations[..],
    ]
    .concat();

    let list_root = |roots: Vec<Chunk>, capacity: usize| {
        let len = roots.len();
        mix_in(naive_root(roots, capacity), len)
    };
    let root = naive_root(
        vec![
            list_root(
                requests.deposits.iter().map(deposit_root).collect(),
                E::max_deposit_requests_per_payload(),
            ),
            list_root(
                requests
                    .withdrawals
                    .iter()
                    .map(withdrawal_request_root)
                    .collect(),
                E::max_withdrawal_requests_per_payload(),
            ),
            list_root(
                requests
                    .consolidations
                    .iter()
                    .map(consolidation_request_root)
                    .collect(),
                E::max_consolidation_requests_per_payload(),
            ),
        ],
        0,
    );

    requests.as_ssz_bytes() == bytes
        && ExecutionRequests::<E>::from_ssz_bytes(&bytes) == Ok(requests.clone())
        && requests.tree_hash_root().0 == root
}

#[quickcheck]
fn flat_withdrawal_requests_match_oracle(seed: u64, count: u8, trailing: u8) -> bool {
    let spec = ChainSpec::mainnet();
    let mut rng = XorShiftRng::seed_from_u64(seed);

    let count = count as usize % 24;
    let trailing = trailing as usize % WithdrawalRequest::max_size();
    let items = (0..count)
        .map(|_| withdrawal_request(&mut rng))
        .collect::<Vec<_>>();
    let mut bytes = items.iter().flat_map(withdrawal_request_bytes).collect::<Vec<_>>();
    bytes.extend(std::iter::repeat(0xff).take(trailing));

    let encoding = bytes[..bytes.len() - trailing].to_vec();
    assert_eq!(encode_flat_list(&items), encoding);

    let expected = if bytes.is_empty() {
        Err(DecodeError::EmptyNotAllowed)
    } else if trailing != 0 {
        Err(DecodeError::NotMultipleOfItemSize {
            len: bytes.len(),
            item_size: WithdrawalRequest::max_size(),
        })
    } else if count > 16 {
        Err(DecodeError::BoundExceeded { len: count, max: 16 })
    } else {
        Ok(items)
    };

    decode_withdrawal_requests::<E>(&bytes, &spec).map(|list| list.to_vec()) == expected
}

#[quickcheck]
fn block_body_matches_oracle(seed: u64, num_deposits: u8) -> bool {
    let mut rng = XorShiftRng::seed_from_u64(seed);
    let randao_reveal = random_bytes::<96>(&mut rng);
    let deposit_root_bytes = random_bytes::<32>(&mut rng);
    let deposit_count = rng.next_u64();
    let block_hash = random_bytes::<32>(&mut rng);
    let graffiti = random_bytes::<32>(&mut rng);
    let deposits = (0..num_deposits % 17)
        .map(|_| deposit(&mut rng))
        .collect::<Vec<_>>();
    let requests = execution_requests(rng.next_u64(), (1, 2, 1));

    let body = BeaconBlockBody::<E> {
        randao_reveal: SignatureBytes::from(randao_reveal),
        eth1_data: Eth1Data {
            deposit_root: Hash256::from(deposit_root_bytes),
            deposit_count,
            block_hash: Hash256::from(block_hash),
        },
        graffiti: Graffiti::from(graffiti),
        deposits: VariableList::new(deposits.clone()).unwrap(),
        execution_requests: requests.clone(),
    };

    let deposit_list = deposits.iter().flat_map(deposit_bytes).collect::<Vec<_>>();
    let first = (96 + 72 + 32 + 4 + 4) as u32;
    let second = first + deposit_list.len() as u32;
    let bytes = [
        &randao_reveal[..],
        &deposit_root_bytes[..],
        &deposit_count.to_le_bytes()[..],
        &block_hash[..],
        &graffiti[..],
        &first.to_le_bytes()[..],
        &second.to_le_bytes()[..],
        &deposit_list[..],
        &requests.as_ssz_bytes()[..],
    ]
    .concat();

    let eth1_data_root = naive_root(
        vec![deposit_root_bytes, u64_chunk(deposit_count), block_hash],
        0,
    );
    let deposits_root = mix_in(
        naive_root(
            deposits.iter().map(deposit_root).collect(),
            E::max_deposits_per_block(),
        ),
        deposits.len(),
    );
    let root = naive_root(
        vec![
            bytes_root(&randao_reveal),
            eth1_data_root,
            graffiti,
            deposits_root,
            requests.tree_hash_root().0,
        ],
        0,
    );

    body.as_ssz_bytes() == bytes
        && BeaconBlockBody::<E>::from_ssz_bytes(&bytes) == Ok(body.clone())
        && body.tree_hash_root().0 == root
}

fn offset(value: usize) -> [u8; 4] {
    (value as u32).to_le_bytes()
}

/// A payload with `counts.0 % 33` bytes of extra data, `counts.1 % 5` transactions of up to 40
/// bytes and `counts.2 % 17` withdrawals.
fn execution_payload(seed: u64, counts: (u8, u8, u8)) -> ExecutionPayload<E> {
    let mut rng = XorShiftRng::seed_from_u64(seed);
    let mut bytes = |len: usize| {
        let mut out = vec![0; len];
        rng.fill_bytes(&mut out);
        out
    };

    let logs_bloom = bytes(256);
    let extra_data = bytes(counts.0 as usize % 33);
    let transactions = (0..counts.1 % 5)
        .map(|i| VariableList::new(bytes(i as usize * 13 % 41)).unwrap())
        .collect::<Vec<_>>();

    let mut rng = XorShiftRng::seed_from_u64(seed.wrapping_add(1));
    let withdrawals = (0..counts.2 % 17)
        .map(|_| Withdrawal {
            index: rng.next_u64(),
            validator_index: rng.next_u64(),
            address: Address::from(random_bytes::<20>(&mut rng)),
            amount: rng.next_u64(),
        })
        .collect::<Vec<_>>();

    ExecutionPayload {
        parent_hash: Hash256::from(random_bytes::<32>(&mut rng)),
        fee_recipient: Address::from(random_bytes::<20>(&mut rng)),
        state_root: Hash256::from(random_bytes::<32>(&mut rng)),
        receipts_root: Hash256::from(random_bytes::<32>(&mut rng)),
        logs_bloom: FixedVector::new(logs_bloom).unwrap(),
        prev_randao: Hash256::from(random_bytes::<32>(&mut rng)),
        block_number: rng.next_u64(),
        gas_limit: rng.next_u64(),
        gas_used: rng.next_u64(),
        timestamp: rng.next_u64(),
        extra_data: VariableList::new(extra_data).unwrap(),
        base_fee_per_gas: Uint256::from_le_bytes(random_bytes::<32>(&mut rng)),
        block_hash: Hash256::from(random_bytes::<32>(&mut rng)),
        transactions: VariableList::new(transactions).unwrap(),
        withdrawals: VariableList::new(withdrawals).unwrap(),
        blob_gas_used: rng.next_u64(),
        excess_blob_gas: rng.next_u64(),
    }
}

fn withdrawal_root(w: &Withdrawal) -> Chunk {
    naive_root(
        vec![
            u64_chunk(w.index),
            u64_chunk(w.validator_index),
            pack(w.address.as_slice())[0],
            u64_chunk(w.amount),
        ],
        0,
    )
}

/// The part of the fixed portion of a payload or header that comes before `extra_data`'s
/// offset.
fn payload_prefix(p: &ExecutionPayload<E>) -> Vec<u8> {
    [
        p.parent_hash.as_slice(),
        p.fee_recipient.as_slice(),
        p.state_root.as_slice(),
        p.receipts_root.as_slice(),
        &p.logs_bloom[..],
        p.prev_randao.as_slice(),
        &p.block_number.to_le_bytes()[..],
        &p.gas_limit.to_le_bytes()[..],
        &p.gas_used.to_le_bytes()[..],
        &p.timestamp.to_le_bytes()[..],
    ]
    .concat()
}

/// Roots of every field of a payload up to and including `block_hash`.
fn payload_prefix_roots(p: &ExecutionPayload<E>) -> Vec<Chunk> {
    vec![
        p.parent_hash.0,
        pack(p.fee_recipient.as_slice())[0],
        p.state_root.0,
        p.receipts_root.0,
        bytes_root(&p.logs_bloom[..]),
        p.prev_randao.0,
        u64_chunk(p.block_number),
        u64_chunk(p.gas_limit),
        u64_chunk(p.gas_used),
        u64_chunk(p.timestamp),
        mix_in(sparse_root(pack(&p.extra_data[..]), 1), p.extra_data.len()),
        p.base_fee_per_gas.to_le_bytes::<32>(),
        p.block_hash.0,
    ]
}

fn transactions_root(p: &ExecutionPayload<E>) -> Chunk {
    let roots = p
        .transactions
        .iter()
        .map(|tx| mix_in(sparse_root(pack(&tx[..]), (1 << 30) / 32), tx.len()))
        .collect::<Vec<_>>();
    mix_in(sparse_root(roots, 1 << 20), p.transactions.len())
}

fn withdrawals_root(p: &ExecutionPayload<E>) -> Chunk {
    let roots = p.withdrawals.iter().map(withdrawal_root).collect();
    mix_in(sparse_root(roots, 16), p.withdrawals.len())
}

#[quickcheck]
fn execution_payload_matches_oracle(seed: u64, counts: (u8, u8, u8)) -> bool {
    let payload = execution_payload(seed, counts);

    let transactions = {
        let table_len = 4 * payload.transactions.len();
        let mut table = vec![];
        let mut contents = vec![];
        for tx in payload.transactions.iter() {
            table.extend_from_slice(&offset(table_len + contents.len()));
            contents.extend_from_slice(&tx[..]);
        }
        [table, contents].concat()
    };
    let withdrawals = payload
        .withdrawals
        .iter()
        .flat_map(|w| {
            [
                &w.index.to_le_bytes()[..],
                &w.validator_index.to_le_bytes()[..],
                w.address.as_slice(),
                &w.amount.to_le_bytes()[..],
            ]
            .concat()
        })
        .collect::<Vec<_>>();

    let extra_data_at = 528;
    let transactions_at = extra_data_at + payload.extra_data.len();
    let withdrawals_at = transactions_at + transactions.len();
    let bytes = [
        &payload_prefix(&payload)[..],
        &offset(extra_data_at)[..],
        &payload.base_fee_per_gas.to_le_bytes::<32>()[..],
        payload.block_hash.as_slice(),
        &offset(transactions_at)[..],
        &offset(withdrawals_at)[..],
        &payload.blob_gas_used.to_le_bytes()[..],
        &payload.excess_blob_gas.to_le_bytes()[..],
        &payload.extra_data[..],
        &transactions[..],
        &withdrawals[..],
    ]
    .concat();

    let mut roots = payload_prefix_roots(&payload);
    roots.extend([
        transactions_root(&payload),
        withdrawals_root(&payload),
        u64_chunk(payload.blob_gas_used),
        u64_chunk(payload.excess_blob_gas),
    ]);
    let root = naive_root(roots, 0);

    payload.as_ssz_bytes() == bytes
        && ExecutionPayload::<E>::from_ssz_bytes(&bytes) == Ok(payload.clone())
        && payload.tree_hash_root().0 == root
}

#[quickcheck]
fn execution_payload_header_matches_oracle(seed: u64, counts: (u8, u8, u8)) -> bool {
    let payload = execution_payload(seed, counts);
    let header = payload.to_header();

    let bytes = [
        &payload_prefix(&payload)[..],
        &offset(584)[..],
        &payload.base_fee_per_gas.to_le_bytes::<32>()[..],
        payload.block_hash.as_slice(),
        &transactions_root(&payload)[..],
        &withdrawals_root(&payload)[..],
        &payload.blob_gas_used.to_le_bytes()[..],
        &payload.excess_blob_gas.to_le_bytes()[..],
        &payload.extra_data[..],
    ]
    .concat();

    let mut roots = payload_prefix_roots(&payload);
    roots.extend([
        transactions_root(&payload),
        withdrawals_root(&payload),
        u64_chunk(payload.blob_gas_used),
        u64_chunk(payload.excess_blob_gas),
    ]);
    let root = naive_root(roots, 0);

    header.as_ssz_bytes() == bytes
        && ExecutionPayloadHeader::<E>::from_ssz_bytes(&bytes) == Ok(header.clone())
        && header.tree_hash_root().0 == root
}

#[quickcheck]
fn signed_block_matches_oracle(seed: u64, slot: u64, proposer_index: u64) -> bool {
    let mut rng = XorShiftRng::seed_from_u64(seed);
    let parent_root = random_bytes::<32>(&mut rng);
    let state_root = random_bytes::<32>(&mut rng);
    let signature = random_bytes::<96>(&mut rng);
    let body = BeaconBlockBody::<E> {
        execution_requests: execution_requests(rng.next_u64(), (2, 1, 1)),
        ..BeaconBlockBody::default()
    };

    let block = BeaconBlock {
        slot: Slot::new(slot),
        proposer_index,
        parent_root: Hash256::from(parent_root),
        state_root: Hash256::from(state_root),
        body: body.clone(),
    };
    let signed = block.clone().into_signed(SignatureBytes::from(signature));

    let block_bytes = [
        &slot.to_le_bytes()[..],
        &proposer_index.to_le_bytes()[..],
        &parent_root[..],
        &state_root[..],
        &offset(84)[..],
        &body.as_ssz_bytes()[..],
    ]
    .concat();
    let signed_bytes = [&offset(100)[..], &signature[..], &block_bytes[..]].concat();

    let block_root = naive_root(
        vec![
            u64_chunk(slot),
            u64_chunk(proposer_index),
            parent_root,
            state_root,
            body.tree_hash_root().0,
        ],
        0,
    );
    let signed_root = naive_root(vec![block_root, bytes_root(&signature)], 0);

    block.as_ssz_bytes() == block_bytes
        && signed.as_ssz_bytes() == signed_bytes
        && SignedBeaconBlock::<E>::from_ssz_bytes(&signed_bytes) == Ok(signed.clone())
        && block.tree_hash_root().0 == block_root
        && block.block_header().tree_hash_root().0 == block_root
        && signed.tree_hash_root().0 == signed_root
}

#[test]
fn empty_list_root_is_zero_subtree() {
    let requests = ExecutionRequests::<E>::default();

    // 8192 = 2^13 leaves for deposits, 16 = 2^4 for withdrawals and 2 = 2^1 for consolidations.
    let zero = |depth: usize| mix_in(naive_root(vec![], 1 << depth), 0);
    let root = naive_root(vec![zero(13), zero(4), zero(1)], 0);

    assert_eq!(requests.tree_hash_root().0, root);

    // The sparse helper agrees with the naive one where both are cheap.
    assert_eq!(sparse_root(vec![], 1 << 13), zero_subtree(13));
    assert_eq!(sparse_root(vec![[7; 32]; 3], 16), naive_root(vec![[7; 32]; 3], 16));
}

fn zero_subtree(depth: usize) -> Chunk {
    naive_root(vec![], 1 << depth)
}
